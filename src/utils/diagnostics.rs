//! Column template diagnostics
//!
//! Turns parse failures and suspicious-but-legal templates into messages a
//! document author can act on:
//!
//! - Parse errors, pointing at the offending position
//! - `w`/`W` columns whose alignment argument is not `l`, `c` or `r`
//! - Templates that declare no data columns
//!
//! ## Example
//!
//! ```rust
//! use colspec::diagnostics::{check_template, DiagnosticLevel};
//! use colspec::ColumnParserOptions;
//!
//! let result = check_template("l|x", &ColumnParserOptions::default());
//! assert!(result.has_errors());
//! assert_eq!(result.diagnostics[0].level, DiagnosticLevel::Error);
//! ```

use std::fmt;

use crate::core::columns::{
    ArrayMetadata, ColumnAlign, ColumnParser, ColumnParserOptions, Specifier,
};
use crate::utils::error::{ColumnError, ErrorKind};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the template parses but probably not as intended
    Warning,
    /// Error - the template is rejected
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Error kind, for parse failures
    pub kind: Option<ErrorKind>,
    /// Codepoint offset into the template
    pub offset: Option<usize>,
    /// The template the diagnostic refers to
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            kind: None,
            offset: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Build an error diagnostic from a parse failure
    pub fn from_error(err: &ColumnError, template: &str) -> Self {
        let mut diag = Diagnostic::new(DiagnosticLevel::Error, err.to_string())
            .with_offset(err.offset())
            .with_source(template);
        diag.kind = Some(err.kind());
        if let Some(suggestion) = suggestion_for(err) {
            diag = diag.with_suggestion(suggestion);
        }
        diag
    }

    /// Add offset information
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

fn suggestion_for(err: &ColumnError) -> Option<String> {
    match err {
        ColumnError::BadColumnCharacter { token, .. } => {
            if matches!(Specifier::from_char(*token), Specifier::Repeat | Specifier::Macro(_)) {
                Some(format!("'{}' needs the extended column grammar", token))
            } else {
                Some("use one of l c r p m b w W | : > < @ !".to_string())
            }
        }
        ColumnError::MissingColumnDimOrUnits { dimension, .. } => Some(format!(
            "'{}' is not a length; write a number with a unit, e.g. 3cm",
            dimension
        )),
        ColumnError::MissingArgForColumn { column, .. } => {
            Some(format!("add a {{...}} argument after '{}'", column))
        }
        ColumnError::MissingCloseBrace { .. } => Some("add the missing '}'".to_string()),
        ColumnError::MissingColumnForSuffix { .. } => {
            Some("move <{...} after the column it applies to".to_string())
        }
        ColumnError::ColArgNotNum { argument, .. } => {
            Some(format!("'{}' is not a repetition count", argument))
        }
        ColumnError::MaxColumns { limit, .. } => {
            Some(format!("the template expands past {} specifiers", limit))
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: level: message
        //         |
        //         | |l|x
        //         |    ^
        //         = help: suggestion

        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
            if let Some(offset) = self.offset {
                let pad: String = source
                    .chars()
                    .take(offset)
                    .map(|c| if c == '\t' { '\t' } else { ' ' })
                    .collect();
                write!(f, "\n  | {}^", pad)?;
            }
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Parsed metadata, when the template was accepted
    pub array: Option<ArrayMetadata>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Parse `template` and collect diagnostics about it
pub fn check_template(template: &str, options: &ColumnParserOptions) -> CheckResult {
    let mut result = CheckResult::new();
    let mut array = ArrayMetadata::new();

    if let Err(err) = ColumnParser::with_options(options.clone()).process(template, &mut array) {
        result.add(Diagnostic::from_error(&err, template));
        return result;
    }

    for (j, column) in array.ralign.iter().enumerate() {
        if let Some(column) = column {
            if column.align == ColumnAlign::Unset {
                result.add(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        format!("column {} has no alignment", j + 1),
                    )
                    .with_source(template)
                    .with_suggestion("the alignment argument of w/W must be l, c or r"),
                );
            }
        }
    }

    if array.num_cols() == 0 {
        result.add(
            Diagnostic::new(DiagnosticLevel::Info, "template declares no columns")
                .with_source(template),
        );
    }

    result.array = Some(array);
    result
}

/// Format diagnostics for display
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
