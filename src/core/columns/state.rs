//! Scan state for a single column template parse

use super::array::{ColumnAlign, ColumnBox, LineStyle, VerticalClass};
use crate::utils::error::{ColumnError, ColumnResult};

/// Index of an output (data) column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ColumnIndex(pub usize);

/// Index of a vertical rule position
///
/// Position `k` sits before column `k`, so position 0 is the left frame and
/// position `n` (for `n` columns) is the right frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BorderIndex(pub usize);

impl ColumnIndex {
    /// Rule position immediately before this column
    pub fn border_before(self) -> BorderIndex {
        BorderIndex(self.0)
    }

    /// The column declared just before this one, if any
    pub fn previous(self) -> Option<ColumnIndex> {
        self.0.checked_sub(1).map(ColumnIndex)
    }

    fn next(self) -> ColumnIndex {
        ColumnIndex(self.0 + 1)
    }
}

/// Write `value` at `idx`, growing the vector with defaults as needed
fn put<T: Clone + Default>(v: &mut Vec<T>, idx: usize, value: T) {
    if v.len() <= idx {
        v.resize(idx + 1, T::default());
    }
    v[idx] = value;
}

/// Where a codepoint of the working template came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Origin {
    /// Offset in the template as written
    offset: usize,
    /// Macro column whose expansion produced the codepoint
    via: Option<char>,
}

/// Mutable state threaded through one `process` call
#[derive(Debug, Clone)]
pub struct ColumnState {
    template: Vec<char>,
    origin: Vec<Origin>,
    /// Length of the template as written
    written: usize,
    /// Cursor, in codepoints
    i: usize,
    /// Most recently dispatched specifier
    c: char,
    /// Next output column
    j: ColumnIndex,
    pub(super) calign: Vec<ColumnAlign>,
    pub(super) cwidth: Vec<Option<String>>,
    pub(super) clines: Vec<Option<LineStyle>>,
    pub(super) cstart: Vec<String>,
    pub(super) cend: Vec<String>,
    pub(super) ralign: Vec<Option<ColumnBox>>,
}

impl ColumnState {
    pub fn new(template: &str) -> Self {
        let template: Vec<char> = template.chars().collect();
        let origin = (0..template.len())
            .map(|offset| Origin { offset, via: None })
            .collect();
        ColumnState {
            written: template.len(),
            template,
            origin,
            i: 0,
            c: '\0',
            j: ColumnIndex(0),
            calign: Vec::new(),
            cwidth: Vec::new(),
            clines: Vec::new(),
            cstart: Vec::new(),
            cend: Vec::new(),
            ralign: Vec::new(),
        }
    }

    /// Cursor position in codepoints
    pub fn position(&self) -> usize {
        self.i
    }

    /// Template length in codepoints
    pub fn len(&self) -> usize {
        self.template.len()
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Text not yet consumed
    pub fn remaining(&self) -> String {
        self.template[self.i.min(self.template.len())..].iter().collect()
    }

    /// Most recently dispatched specifier, as the author wrote it
    ///
    /// Inside a macro column expansion this is the macro character.
    pub fn specifier(&self) -> char {
        self.c
    }

    /// Map a position in the working template back to the written template
    ///
    /// Text produced by an expansion maps to the specifier that was expanded;
    /// positions at or past the end map to the end of the written template.
    pub fn source_offset(&self, position: usize) -> usize {
        self.origin
            .get(position)
            .map_or(self.written, |origin| origin.offset)
    }

    /// Current output column
    pub fn column(&self) -> ColumnIndex {
        self.j
    }

    /// Consume the next specifier character
    pub fn next_specifier(&mut self) -> Option<char> {
        let c = *self.template.get(self.i)?;
        self.c = self.origin[self.i].via.unwrap_or(c);
        self.i += 1;
        Some(c)
    }

    /// Read one argument: a single character, or the text of a balanced
    /// `{...}` group with the outer braces stripped
    ///
    /// Leading spaces are skipped. Inside a group a backslash escapes the
    /// next character, so `\{` and `\}` do not change the nesting depth.
    pub fn read_braces(&mut self) -> ColumnResult<String> {
        while self.template.get(self.i) == Some(&' ') {
            self.i += 1;
        }
        let Some(&first) = self.template.get(self.i) else {
            return Err(ColumnError::MissingArgForColumn {
                column: self.c,
                offset: self.i,
            });
        };
        self.i += 1;
        if first != '{' {
            return Ok(first.to_string());
        }

        let start = self.i;
        let mut depth = 1usize;
        while self.i < self.template.len() {
            let ch = self.template[self.i];
            self.i += 1;
            match ch {
                '\\' => self.i += 1,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(self.template[start..self.i - 1].iter().collect());
                    }
                }
                _ => {}
            }
        }
        self.i = self.template.len();
        Err(ColumnError::MissingCloseBrace {
            column: self.c,
            offset: self.i,
        })
    }

    /// Replace the consumed text from `start` up to the cursor with
    /// `expansion` and continue scanning at `start`
    ///
    /// `via` names the macro column being expanded, if any.
    pub(super) fn splice(&mut self, start: usize, expansion: &str, via: Option<char>) {
        let start = start.min(self.i);
        let offset = self.source_offset(start);
        let inserted: Vec<char> = expansion.chars().collect();
        let origin = Origin {
            offset,
            via: via.or(self.origin.get(start).and_then(|o| o.via)),
        };
        self.origin
            .splice(start..self.i, std::iter::repeat(origin).take(inserted.len()));
        self.template.splice(start..self.i, inserted);
        self.i = start;
    }

    /// Declare an `l`/`c`/`r` column
    pub(super) fn add_column(&mut self, align: ColumnAlign) {
        put(&mut self.calign, self.j.0, align);
        self.j = self.j.next();
    }

    /// Declare a boxed column with an explicit width
    pub(super) fn add_boxed_column(
        &mut self,
        vertical: VerticalClass,
        width: String,
        align: ColumnAlign,
    ) {
        let j = self.j.0;
        put(&mut self.calign, j, align);
        put(&mut self.cwidth, j, Some(width.clone()));
        put(&mut self.ralign, j, Some(ColumnBox::new(vertical, width, align)));
        self.j = self.j.next();
    }

    /// Record a rule before the current column
    pub(super) fn add_rule(&mut self, style: LineStyle) {
        let BorderIndex(k) = self.j.border_before();
        put(&mut self.clines, k, Some(style));
    }

    /// Append `>{...}` material for the current column
    pub(super) fn add_prefix(&mut self, text: &str) {
        let j = self.j.0;
        if self.cstart.len() <= j {
            self.cstart.resize(j + 1, String::new());
        }
        self.cstart[j].push_str(text);
    }

    /// Append `<{...}` material for the previous column
    pub(super) fn add_suffix(&mut self, column: ColumnIndex, text: &str) {
        let j = column.0;
        if self.cend.len() <= j {
            self.cend.resize(j + 1, String::new());
        }
        self.cend[j].push_str(text);
    }
}
