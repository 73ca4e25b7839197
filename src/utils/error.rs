//! Error handling for column template parsing
//!
//! Every failure aborts the current parse. Errors carry the offending token
//! and the codepoint offset at which the scanner stopped, so callers can
//! turn them into user-facing diagnostics about the template.

use std::fmt;
use thiserror::Error;

/// Failure kind, without the data attached to a particular occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadColumnCharacter,
    MissingColumnDimOrUnits,
    MissingArgForColumn,
    MissingCloseBrace,
    MissingColumnForSuffix,
    ColArgNotNum,
    MaxColumns,
}

impl ErrorKind {
    /// Stable identifier of the failure kind
    pub fn id(&self) -> &'static str {
        match self {
            ErrorKind::BadColumnCharacter => "BadColumnCharacter",
            ErrorKind::MissingColumnDimOrUnits => "MissingColumnDimOrUnits",
            ErrorKind::MissingArgForColumn => "MissingArgForColumn",
            ErrorKind::MissingCloseBrace => "MissingCloseBrace",
            ErrorKind::MissingColumnForSuffix => "MissingColumnForSuffix",
            ErrorKind::ColArgNotNum => "ColArgNotNum",
            ErrorKind::MaxColumns => "MaxColumns",
        }
    }

    /// Message template; `%1` stands for the offending token
    pub fn message_template(&self) -> &'static str {
        match self {
            ErrorKind::BadColumnCharacter => "Illegal pream-token (%1)",
            ErrorKind::MissingColumnDimOrUnits => {
                "Missing dimension or its units for %1 column declaration"
            }
            ErrorKind::MissingArgForColumn => "Missing argument for %1 column declaration",
            ErrorKind::MissingCloseBrace => "Missing close brace",
            ErrorKind::MissingColumnForSuffix => "No column precedes the %1 column suffix",
            ErrorKind::ColArgNotNum => "First argument to %1 column specifier must be a number",
            ErrorKind::MaxColumns => {
                "Too many column specifiers (perhaps looping column definitions?)"
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Column template parse error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// An input character has no registered action
    #[error("Illegal pream-token ({token})")]
    BadColumnCharacter { token: char, offset: usize },

    /// A `p`/`m`/`b`/`w`/`W` width argument is not a dimension
    #[error("Missing dimension or its units for {column} column declaration")]
    MissingColumnDimOrUnits {
        column: char,
        dimension: String,
        offset: usize,
    },

    /// An argument-requiring specifier sits at the end of the template
    #[error("Missing argument for {column} column declaration")]
    MissingArgForColumn { column: char, offset: usize },

    /// A brace-delimited argument runs off the end of the template
    #[error("Missing close brace")]
    MissingCloseBrace { column: char, offset: usize },

    /// `<` appears before any column has been declared
    #[error("No column precedes the {column} column suffix")]
    MissingColumnForSuffix { column: char, offset: usize },

    /// The count of a `*{n}{cols}` repetition is not a number
    #[error("First argument to {column} column specifier must be a number")]
    ColArgNotNum {
        column: char,
        argument: String,
        offset: usize,
    },

    /// The template kept expanding past the configured specifier budget
    #[error("Too many column specifiers (perhaps looping column definitions?)")]
    MaxColumns { limit: usize, offset: usize },
}

impl ColumnError {
    /// The failure kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColumnError::BadColumnCharacter { .. } => ErrorKind::BadColumnCharacter,
            ColumnError::MissingColumnDimOrUnits { .. } => ErrorKind::MissingColumnDimOrUnits,
            ColumnError::MissingArgForColumn { .. } => ErrorKind::MissingArgForColumn,
            ColumnError::MissingCloseBrace { .. } => ErrorKind::MissingCloseBrace,
            ColumnError::MissingColumnForSuffix { .. } => ErrorKind::MissingColumnForSuffix,
            ColumnError::ColArgNotNum { .. } => ErrorKind::ColArgNotNum,
            ColumnError::MaxColumns { .. } => ErrorKind::MaxColumns,
        }
    }

    /// The token substituted for `%1` in the message template
    pub fn token(&self) -> Option<char> {
        match self {
            ColumnError::BadColumnCharacter { token, .. } => Some(*token),
            ColumnError::MissingColumnDimOrUnits { column, .. }
            | ColumnError::MissingArgForColumn { column, .. }
            | ColumnError::MissingColumnForSuffix { column, .. }
            | ColumnError::ColArgNotNum { column, .. } => Some(*column),
            ColumnError::MissingCloseBrace { .. } | ColumnError::MaxColumns { .. } => None,
        }
    }

    /// Codepoint offset into the template where parsing stopped
    pub fn offset(&self) -> usize {
        match self {
            ColumnError::BadColumnCharacter { offset, .. }
            | ColumnError::MissingColumnDimOrUnits { offset, .. }
            | ColumnError::MissingArgForColumn { offset, .. }
            | ColumnError::MissingCloseBrace { offset, .. }
            | ColumnError::MissingColumnForSuffix { offset, .. }
            | ColumnError::ColArgNotNum { offset, .. }
            | ColumnError::MaxColumns { offset, .. } => *offset,
        }
    }

    /// The same error reported at `position`
    pub fn at(mut self, position: usize) -> Self {
        match &mut self {
            ColumnError::BadColumnCharacter { offset, .. }
            | ColumnError::MissingColumnDimOrUnits { offset, .. }
            | ColumnError::MissingArgForColumn { offset, .. }
            | ColumnError::MissingCloseBrace { offset, .. }
            | ColumnError::MissingColumnForSuffix { offset, .. }
            | ColumnError::ColArgNotNum { offset, .. }
            | ColumnError::MaxColumns { offset, .. } => *offset = position,
        }
        self
    }

    /// The `(kind, message-template, token)` triple
    pub fn parts(&self) -> (ErrorKind, &'static str, Option<char>) {
        let kind = self.kind();
        (kind, kind.message_template(), self.token())
    }
}

/// Result type for column template operations
pub type ColumnResult<T> = Result<T, ColumnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_character_display() {
        let err = ColumnError::BadColumnCharacter {
            token: 'x',
            offset: 0,
        };
        assert_eq!(err.to_string(), "Illegal pream-token (x)");
        assert_eq!(err.kind().id(), "BadColumnCharacter");
        assert_eq!(err.token(), Some('x'));
    }

    #[test]
    fn test_template_matches_display() {
        let err = ColumnError::MissingArgForColumn {
            column: 'p',
            offset: 1,
        };
        let (kind, template, token) = err.parts();
        assert_eq!(kind, ErrorKind::MissingArgForColumn);
        let rendered = template.replace("%1", &token.unwrap().to_string());
        assert_eq!(rendered, err.to_string());
    }

    #[test]
    fn test_at_moves_offset_only() {
        let err = ColumnError::ColArgNotNum {
            column: '*',
            argument: "x".to_string(),
            offset: 3,
        }
        .at(0);
        assert_eq!(err.offset(), 0);
        assert_eq!(err.token(), Some('*'));
    }

    #[test]
    fn test_close_brace_has_no_token() {
        let err = ColumnError::MissingCloseBrace {
            column: 'p',
            offset: 5,
        };
        assert_eq!(err.token(), None);
        assert_eq!(err.offset(), 5);
        assert_eq!(err.to_string(), "Missing close brace");
    }
}
