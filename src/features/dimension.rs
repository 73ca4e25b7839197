//! Dimension syntax validation
//!
//! Width arguments of `p`, `m`, `b`, `w` and `W` columns must be TeX
//! lengths: a number followed by a unit (`3cm`, `-.5em`, `12 pt`) or one of
//! the line-width keywords, optionally scaled (`0.3\linewidth`).

use crate::data::constants::{DimensionUnit, DIMENSION_UNITS};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number followed by a unit name
    static ref UNIT_DIMENSION: Regex =
        Regex::new(r"^\s*([-+]?(?:\.\d+|\d+(?:\.\d*)?))\s*([a-z]{2})\s*$").unwrap();

    /// Optional factor followed by a width keyword
    static ref KEYWORD_DIMENSION: Regex =
        Regex::new(r"^\s*([-+]?(?:\.\d+|\d+(?:\.\d*)?))?\s*\\([a-z]+)\s*$").unwrap();
}

/// A parsed length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: DimensionUnit,
}

impl Dimension {
    /// Parse a dimension string like "3cm", ".5em" or "0.3\linewidth"
    pub fn parse(s: &str) -> Option<Dimension> {
        if let Some(caps) = UNIT_DIMENSION.captures(s) {
            let unit = *DIMENSION_UNITS.get(&caps[2])?;
            if unit.is_keyword() {
                return None;
            }
            let value = caps[1].parse::<f64>().ok()?;
            return Some(Dimension { value, unit });
        }

        let caps = KEYWORD_DIMENSION.captures(s)?;
        let unit = *DIMENSION_UNITS.get(&caps[2])?;
        if !unit.is_keyword() {
            return None;
        }
        let value = match caps.get(1) {
            Some(factor) => factor.as_str().parse::<f64>().ok()?,
            None => 1.0,
        };
        Some(Dimension { value, unit })
    }

    /// Render as a CSS length
    pub fn to_css(&self) -> String {
        let v = self.value;
        match self.unit {
            DimensionUnit::Point => format!("{}pt", format_num(v * 72.0 / 72.27)),
            DimensionUnit::BigPoint => format!("{}pt", format_num(v)),
            DimensionUnit::Pica => format!("{}pc", format_num(v)),
            DimensionUnit::Inch => format!("{}in", format_num(v)),
            DimensionUnit::Centimeter => format!("{}cm", format_num(v)),
            DimensionUnit::Millimeter => format!("{}mm", format_num(v)),
            DimensionUnit::Em => format!("{}em", format_num(v)),
            DimensionUnit::Ex => format!("{}ex", format_num(v)),
            DimensionUnit::Mu => format!("{}em", format_num(v / 18.0)),
            DimensionUnit::Pixel => format!("{}px", format_num(v)),
            DimensionUnit::Didot => format!("{}pt", format_num(v * 1238.0 / 1157.0 * 72.0 / 72.27)),
            DimensionUnit::Cicero => {
                format!("{}pt", format_num(v * 12.0 * 1238.0 / 1157.0 * 72.0 / 72.27))
            }
            DimensionUnit::ScaledPoint => format!("{}pt", format_num(v / 65536.0 * 72.0 / 72.27)),
            DimensionUnit::LineWidth
            | DimensionUnit::TextWidth
            | DimensionUnit::ColumnWidth
            | DimensionUnit::HSize => format!("{}%", format_num(v * 100.0)),
        }
    }
}

/// Split a dimension into its numeric value and unit name
///
/// Keyword widths report the keyword with its leading backslash.
pub fn match_dimension(text: &str) -> Option<(f64, &'static str)> {
    let dim = Dimension::parse(text)?;
    Some((dim.value, dim.unit.name()))
}

/// Whether `text` is a well-formed length
pub fn is_valid_dimension(text: &str) -> bool {
    Dimension::parse(text).is_some()
}

/// Format number, removing trailing zeros
fn format_num(v: f64) -> String {
    let s = format!("{:.5}", v);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_dimensions() {
        for text in ["3cm", "12pt", "-.5em", "+1.5 ex", " 2mm ", "3.in", "18mu", "1sp"] {
            assert!(is_valid_dimension(text), "expected '{}' to be valid", text);
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        for text in ["", "nope", "3", "cm", "3 furlongs", "3cmx", "1.2.3pt", "--1pt"] {
            assert!(!is_valid_dimension(text), "expected '{}' to be invalid", text);
        }
    }

    #[test]
    fn test_keyword_dimensions() {
        assert!(is_valid_dimension(r"\linewidth"));
        assert!(is_valid_dimension(r"0.3\textwidth"));
        assert!(is_valid_dimension(r".5 \columnwidth"));
        assert!(!is_valid_dimension(r"\foo"));
        assert!(!is_valid_dimension(r"2\cm"));
        assert!(!is_valid_dimension("2linewidth"));
    }

    #[test]
    fn test_match_dimension() {
        assert_eq!(match_dimension("3cm"), Some((3.0, "cm")));
        assert_eq!(match_dimension("-.25 em"), Some((-0.25, "em")));
        assert_eq!(match_dimension(r"0.5\linewidth"), Some((0.5, r"\linewidth")));
        assert_eq!(match_dimension("x"), None);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Dimension::parse("3cm").unwrap().to_css(), "3cm");
        assert_eq!(Dimension::parse("18mu").unwrap().to_css(), "1em");
        assert_eq!(Dimension::parse(r"0.25\linewidth").unwrap().to_css(), "25%");
        assert_eq!(Dimension::parse("72.27pt").unwrap().to_css(), "72pt");
    }
}
