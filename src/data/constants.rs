//! Constants and lookup tables for column templates
//!
//! - Dimension units accepted in column width arguments
//! - Built-in macro column definitions (`P`, `M`, `B`)
//! - Human-readable descriptions of every specifier

use phf::phf_map;

// ============================================================================
// Dimension Units
// ============================================================================

/// Unit of a TeX length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DimensionUnit {
    Point,
    BigPoint,
    Pica,
    Inch,
    Centimeter,
    Millimeter,
    Em,
    Ex,
    Mu,
    Pixel,
    Didot,
    Cicero,
    ScaledPoint,
    LineWidth,
    TextWidth,
    ColumnWidth,
    HSize,
}

impl DimensionUnit {
    /// Unit name as written in a template
    pub fn name(&self) -> &'static str {
        match self {
            DimensionUnit::Point => "pt",
            DimensionUnit::BigPoint => "bp",
            DimensionUnit::Pica => "pc",
            DimensionUnit::Inch => "in",
            DimensionUnit::Centimeter => "cm",
            DimensionUnit::Millimeter => "mm",
            DimensionUnit::Em => "em",
            DimensionUnit::Ex => "ex",
            DimensionUnit::Mu => "mu",
            DimensionUnit::Pixel => "px",
            DimensionUnit::Didot => "dd",
            DimensionUnit::Cicero => "cc",
            DimensionUnit::ScaledPoint => "sp",
            DimensionUnit::LineWidth => "\\linewidth",
            DimensionUnit::TextWidth => "\\textwidth",
            DimensionUnit::ColumnWidth => "\\columnwidth",
            DimensionUnit::HSize => "\\hsize",
        }
    }

    /// Width keywords are written as control sequences and may omit the factor
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            DimensionUnit::LineWidth
                | DimensionUnit::TextWidth
                | DimensionUnit::ColumnWidth
                | DimensionUnit::HSize
        )
    }
}

/// Unit names (keywords without their backslash) to units
pub static DIMENSION_UNITS: phf::Map<&'static str, DimensionUnit> = phf_map! {
    "pt" => DimensionUnit::Point,
    "bp" => DimensionUnit::BigPoint,
    "pc" => DimensionUnit::Pica,
    "in" => DimensionUnit::Inch,
    "cm" => DimensionUnit::Centimeter,
    "mm" => DimensionUnit::Millimeter,
    "em" => DimensionUnit::Em,
    "ex" => DimensionUnit::Ex,
    "mu" => DimensionUnit::Mu,
    "px" => DimensionUnit::Pixel,
    "dd" => DimensionUnit::Didot,
    "cc" => DimensionUnit::Cicero,
    "sp" => DimensionUnit::ScaledPoint,
    "linewidth" => DimensionUnit::LineWidth,
    "textwidth" => DimensionUnit::TextWidth,
    "columnwidth" => DimensionUnit::ColumnWidth,
    "hsize" => DimensionUnit::HSize,
};

// ============================================================================
// Macro Columns
// ============================================================================

/// Built-in macro columns: `#1` is replaced by the column's argument
pub static MACRO_COLUMNS: phf::Map<char, &'static str> = phf_map! {
    'P' => ">{$}p{#1}<{$}",
    'M' => ">{$}m{#1}<{$}",
    'B' => ">{$}b{#1}<{$}",
};

// ============================================================================
// Specifier Descriptions
// ============================================================================

/// Specifier characters with a short description, in display order
pub const SPECIFIER_HELP: &[(char, &str)] = &[
    ('l', "left-aligned column"),
    ('c', "centered column"),
    ('r', "right-aligned column"),
    ('p', "top-aligned paragraph column, p{width}"),
    ('m', "vertically centered paragraph column, m{width}"),
    ('b', "bottom-aligned paragraph column, b{width}"),
    ('w', "fixed-width column, w{align}{width}"),
    ('W', "fixed-width column, W{align}{width}"),
    ('|', "solid rule"),
    (':', "dashed rule"),
    ('>', "material inserted before each cell, >{decl}"),
    ('<', "material inserted after each cell, <{decl}"),
    ('@', "inter-column material (ignored), @{text}"),
    ('!', "inter-column material (ignored), !{text}"),
    (' ', "ignored"),
    ('*', "repetition, *{n}{cols} (extended)"),
    ('P', "math paragraph column, P{width} (extended)"),
    ('M', "math centered paragraph column, M{width} (extended)"),
    ('B', "math bottom paragraph column, B{width} (extended)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_names_round_trip_through_table() {
        for (key, unit) in DIMENSION_UNITS.entries() {
            assert_eq!(unit.name().trim_start_matches('\\'), *key);
        }
    }

    #[test]
    fn test_macro_columns_take_one_argument() {
        for (_, body) in MACRO_COLUMNS.entries() {
            assert_eq!(body.matches("#1").count(), 1);
        }
    }
}
