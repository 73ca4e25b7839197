//! Column Template Parser
//!
//! Interprets the column preamble of `array`/`tabular`-like environments,
//! e.g. `|l|c|p{3cm}|r|`, and turns it into per-column metadata:
//! alignment, explicit widths, vertical box classes, rules and framing.
//!
//! # Architecture
//!
//! A single left-to-right pass over the template, one codepoint at a time:
//!
//! ```text
//! template -> Specifier lookup -> handler (may read {args}) -> ColumnState
//!          -> finalize -> ArrayMetadata
//! ```
//!
//! Data columns and rule positions live in separate index spaces: column
//! `k` is preceded by rule position `k`, so position 0 is the left frame.
//!
//! # Example
//!
//! ```rust
//! use colspec::core::columns::{ArrayMetadata, ColumnParser, FrameSide};
//!
//! let mut array = ArrayMetadata::new();
//! ColumnParser::new().process("|l|c|r|", &mut array).unwrap();
//! assert_eq!(array.columnalign(), Some("left center right"));
//! assert_eq!(array.frame, vec![FrameSide::Left, FrameSide::Right]);
//! ```

mod array;
mod specifier;
mod state;

#[cfg(test)]
mod tests;

pub use array::{
    ArrayDef, ArrayMetadata, ColumnAlign, ColumnBox, FrameSide, LineStyle, VerticalClass,
};
pub use specifier::Specifier;
pub use state::{BorderIndex, ColumnIndex, ColumnState};

use crate::data::constants::MACRO_COLUMNS;
use crate::features::dimension::is_valid_dimension;
use crate::utils::error::{ColumnError, ColumnResult};
use tracing::{debug, trace};

/// Bound on template growth through `*`, relative to `max_columns`
const EXPANSION_FACTOR: usize = 64;

// =============================================================================
// Parser Options
// =============================================================================

/// Options for column template parsing
#[derive(Debug, Clone)]
pub struct ColumnParserOptions {
    /// Maximum number of specifiers dispatched in one parse, counting those
    /// produced by `*` and macro column expansion
    /// Default: 10000
    pub max_columns: usize,

    /// Accept `*{n}{cols}` repetition and the `P`/`M`/`B` macro columns
    /// Default: true
    pub extended: bool,
}

impl Default for ColumnParserOptions {
    fn default() -> Self {
        Self {
            max_columns: 10000,
            extended: true,
        }
    }
}

impl ColumnParserOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the core grammar: `l c r p m b w W | : > < @ !` and space
    pub fn strict() -> Self {
        Self {
            extended: false,
            ..Self::default()
        }
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Column template parser
#[derive(Debug, Clone, Default)]
pub struct ColumnParser {
    options: ColumnParserOptions,
}

impl ColumnParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ColumnParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ColumnParserOptions {
        &self.options
    }

    /// Parse `template` and write the result into `array`
    ///
    /// On error `array` is left untouched.
    pub fn process(&self, template: &str, array: &mut ArrayMetadata) -> ColumnResult<()> {
        debug!(%template, "processing column template");
        let mut state = ColumnState::new(template);
        let mut dispatched = 0usize;

        while let Some(c) = state.next_specifier() {
            let offset = state.position() - 1;
            dispatched += 1;
            if dispatched > self.options.max_columns {
                return Err(ColumnError::MaxColumns {
                    limit: self.options.max_columns,
                    offset: state.source_offset(offset),
                });
            }

            let spec = match Specifier::from_char(c) {
                s if s.is_extended() && !self.options.extended => Specifier::Unknown(c),
                s => s,
            };
            trace!(specifier = %c, offset, column = state.column().0, "dispatch");
            self.dispatch(spec, offset, &mut state).map_err(|err| {
                let at = state.source_offset(err.offset());
                err.at(at)
            })?;
        }

        let columns = state.column().0;
        finalize(state, array);
        debug!(columns, "column template processed");
        Ok(())
    }

    fn dispatch(
        &self,
        spec: Specifier,
        offset: usize,
        state: &mut ColumnState,
    ) -> ColumnResult<()> {
        match spec {
            Specifier::Align(align) => state.add_column(align),
            Specifier::Paragraph(vertical) => {
                get_column(state, vertical, Some(ColumnAlign::Left))?;
            }
            Specifier::Wide => get_column(state, VerticalClass::Top, None)?,
            Specifier::Rule(style) => state.add_rule(style),
            Specifier::Prefix => {
                let text = state.read_braces()?;
                state.add_prefix(&text);
            }
            Specifier::Suffix => {
                let text = state.read_braces()?;
                let column = state.column().previous().ok_or(
                    ColumnError::MissingColumnForSuffix {
                        column: state.specifier(),
                        offset,
                    },
                )?;
                state.add_suffix(column, &text);
            }
            Specifier::Spacing => {
                state.read_braces()?;
            }
            Specifier::Space => {}
            Specifier::Repeat => self.repeat(state, offset)?,
            Specifier::Macro(c) => {
                let body = MACRO_COLUMNS
                    .get(&c)
                    .ok_or(ColumnError::BadColumnCharacter { token: c, offset })?;
                let arg = state.read_braces()?;
                state.splice(offset, &body.replace("#1", &arg), Some(c));
            }
            Specifier::Unknown(token) => {
                return Err(ColumnError::BadColumnCharacter { token, offset });
            }
        }
        Ok(())
    }

    /// `*{n}{cols}`: splice `cols` repeated `n` times in place of the repetition
    fn repeat(&self, state: &mut ColumnState, offset: usize) -> ColumnResult<()> {
        let count = state.read_braces()?;
        let cols = state.read_braces()?;
        let not_a_number = || ColumnError::ColArgNotNum {
            column: '*',
            argument: count.clone(),
            offset,
        };
        if count.is_empty() || !count.chars().all(|c| c.is_ascii_digit()) {
            return Err(not_a_number());
        }
        let n: usize = count.parse().map_err(|_| ColumnError::MaxColumns {
            limit: self.options.max_columns,
            offset,
        })?;
        let grown = state
            .len()
            .saturating_add(n.saturating_mul(cols.chars().count()));
        if n > self.options.max_columns
            || grown > self.options.max_columns.saturating_mul(EXPANSION_FACTOR)
        {
            return Err(ColumnError::MaxColumns {
                limit: self.options.max_columns,
                offset,
            });
        }
        state.splice(offset, &cols.repeat(n), None);
        Ok(())
    }
}

// =============================================================================
// Column Handlers
// =============================================================================

/// Handle a boxed column; `forced` skips the alignment argument
fn get_column(
    state: &mut ColumnState,
    vertical: VerticalClass,
    forced: Option<ColumnAlign>,
) -> ColumnResult<()> {
    let align = match forced {
        Some(align) => align,
        None => ColumnAlign::from_argument(&state.read_braces()?),
    };
    let width = get_dimension(state)?;
    state.add_boxed_column(vertical, width, align);
    Ok(())
}

/// Read a width argument and check that it is a dimension
fn get_dimension(state: &mut ColumnState) -> ColumnResult<String> {
    let dimension = state.read_braces()?;
    if !is_valid_dimension(&dimension) {
        return Err(ColumnError::MissingColumnDimOrUnits {
            column: state.specifier(),
            dimension,
            offset: state.position(),
        });
    }
    Ok(dimension)
}

// =============================================================================
// Finalization
// =============================================================================

/// Fold the per-column sequences into `array`
fn finalize(state: ColumnState, array: &mut ArrayMetadata) {
    let ncols = state.calign.len();

    array.arraydef.columnalign = Some(
        state
            .calign
            .iter()
            .map(ColumnAlign::as_str)
            .collect::<Vec<_>>()
            .join(" "),
    );

    if !state.cwidth.is_empty() {
        let mut cwidth = state.cwidth;
        if cwidth.len() < ncols {
            cwidth.resize(ncols, None);
        }
        array.arraydef.columnwidth = Some(
            cwidth
                .iter()
                .map(|w| match w.as_deref() {
                    Some(w) if !w.is_empty() => w,
                    _ => "auto",
                })
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    if !state.clines.is_empty() {
        let mut clines = state.clines;
        if let Some(left) = clines[0] {
            array.frame.push(FrameSide::Left);
            array.dashed = left == LineStyle::Dashed;
        }
        if clines.len() > ncols {
            array.frame.push(FrameSide::Right);
            clines.pop();
        } else if clines.len() < ncols {
            clines.resize(ncols, Some(LineStyle::None));
        }
        array.arraydef.columnlines = Some(
            clines
                .iter()
                .skip(1)
                .map(|l| l.unwrap_or(LineStyle::None).as_str())
                .collect::<Vec<_>>()
                .join(" "),
        );
    }

    for (j, column) in state.ralign.into_iter().enumerate() {
        if let Some(column) = column {
            if array.ralign.len() <= j {
                array.ralign.resize(j + 1, None);
            }
            array.ralign[j] = Some(column);
        }
    }
    merge_material(&mut array.cstart, state.cstart);
    merge_material(&mut array.cend, state.cend);
}

fn merge_material(target: &mut Vec<String>, material: Vec<String>) {
    for (j, text) in material.into_iter().enumerate() {
        if text.is_empty() {
            continue;
        }
        if target.len() <= j {
            target.resize(j + 1, String::new());
        }
        target[j].push_str(&text);
    }
}
