//! Column specifier characters

use super::array::{ColumnAlign, LineStyle, VerticalClass};
use phf::phf_map;

/// Action selected by one template character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// `l`, `c`, `r`
    Align(ColumnAlign),
    /// `p`, `m`, `b`: width argument, alignment fixed to left
    Paragraph(VerticalClass),
    /// `w`, `W`: alignment argument, then width argument
    Wide,
    /// `|`, `:`
    Rule(LineStyle),
    /// `>`
    Prefix,
    /// `<`
    Suffix,
    /// `@`, `!`: argument is read and dropped
    Spacing,
    /// ` `
    Space,
    /// `*{n}{cols}`
    Repeat,
    /// `P`, `M`, `B`: expands to its body in `MACRO_COLUMNS`
    Macro(char),
    /// No registered action
    Unknown(char),
}

/// Dispatch table shared by every parse
static SPECIFIERS: phf::Map<char, Specifier> = phf_map! {
    'l' => Specifier::Align(ColumnAlign::Left),
    'c' => Specifier::Align(ColumnAlign::Center),
    'r' => Specifier::Align(ColumnAlign::Right),
    'p' => Specifier::Paragraph(VerticalClass::Top),
    'm' => Specifier::Paragraph(VerticalClass::Center),
    'b' => Specifier::Paragraph(VerticalClass::Bottom),
    'w' => Specifier::Wide,
    'W' => Specifier::Wide,
    '|' => Specifier::Rule(LineStyle::Solid),
    ':' => Specifier::Rule(LineStyle::Dashed),
    '>' => Specifier::Prefix,
    '<' => Specifier::Suffix,
    '@' => Specifier::Spacing,
    '!' => Specifier::Spacing,
    ' ' => Specifier::Space,
    '*' => Specifier::Repeat,
    'P' => Specifier::Macro('P'),
    'M' => Specifier::Macro('M'),
    'B' => Specifier::Macro('B'),
};

impl Specifier {
    pub fn from_char(c: char) -> Self {
        SPECIFIERS.get(&c).copied().unwrap_or(Specifier::Unknown(c))
    }

    /// Whether this specifier belongs to the extended grammar
    pub fn is_extended(&self) -> bool {
        matches!(self, Specifier::Repeat | Specifier::Macro(_))
    }

    /// Whether this specifier declares an output column
    pub fn produces_column(&self) -> bool {
        matches!(
            self,
            Specifier::Align(_) | Specifier::Paragraph(_) | Specifier::Wide
        )
    }
}
