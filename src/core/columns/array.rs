//! Array metadata produced from a column template

use std::fmt;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
    /// Alignment argument was present but not `l`, `c` or `r`
    #[default]
    Unset,
}

impl ColumnAlign {
    /// Map an alignment argument (`l`, `c`, `r`); anything else is unset
    pub fn from_argument(arg: &str) -> Self {
        match arg {
            "l" => ColumnAlign::Left,
            "c" => ColumnAlign::Center,
            "r" => ColumnAlign::Right,
            _ => ColumnAlign::Unset,
        }
    }

    /// MathML `columnalign` keyword; empty when unset
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnAlign::Left => "left",
            ColumnAlign::Center => "center",
            ColumnAlign::Right => "right",
            ColumnAlign::Unset => "",
        }
    }
}

/// Vertical box alignment of a paragraph column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VerticalClass {
    /// `p`, `w`, `W`
    Top,
    /// `m`
    Center,
    /// `b`
    Bottom,
}

impl VerticalClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalClass::Top => "top",
            VerticalClass::Center => "center",
            VerticalClass::Bottom => "bottom",
        }
    }
}

/// Style of a vertical rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineStyle {
    Solid,
    Dashed,
    None,
}

impl LineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::None => "none",
        }
    }
}

/// Outer table border
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrameSide {
    Left,
    Right,
}

impl fmt::Display for FrameSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSide::Left => write!(f, "left"),
            FrameSide::Right => write!(f, "right"),
        }
    }
}

/// Box layout of a `p`/`m`/`b`/`w`/`W` column: (vertical class, width, alignment)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnBox {
    pub vertical: VerticalClass,
    pub width: String,
    pub align: ColumnAlign,
}

impl ColumnBox {
    pub fn new(vertical: VerticalClass, width: impl Into<String>, align: ColumnAlign) -> Self {
        Self {
            vertical,
            width: width.into(),
            align,
        }
    }
}

/// Space-joined attribute strings for the rendered table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayDef {
    /// One alignment keyword per column; always set after a parse
    pub columnalign: Option<String>,
    /// Width or `auto` per column; only set when some width was declared
    pub columnwidth: Option<String>,
    /// `solid`/`dashed`/`none` per interior border; only set when some rule was declared
    pub columnlines: Option<String>,
}

/// Caller-owned array record filled in by the column parser
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayMetadata {
    pub arraydef: ArrayDef,
    /// Outer borders, in the order they were found
    pub frame: Vec<FrameSide>,
    /// Whether the left frame border is dashed
    pub dashed: bool,
    /// Box layout per column, `None` for plain `l`/`c`/`r` columns
    pub ralign: Vec<Option<ColumnBox>>,
    /// Material from `>{...}`, per column
    pub cstart: Vec<String>,
    /// Material from `<{...}`, per column
    pub cend: Vec<String>,
}

impl ArrayMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size `ralign` for a known number of columns
    pub fn with_columns(columns: usize) -> Self {
        Self {
            ralign: vec![None; columns],
            ..Self::default()
        }
    }

    pub fn columnalign(&self) -> Option<&str> {
        self.arraydef.columnalign.as_deref()
    }

    pub fn columnwidth(&self) -> Option<&str> {
        self.arraydef.columnwidth.as_deref()
    }

    pub fn columnlines(&self) -> Option<&str> {
        self.arraydef.columnlines.as_deref()
    }

    /// Number of data columns, as recorded in `columnalign`
    pub fn num_cols(&self) -> usize {
        match self.columnalign() {
            Some("") | None => 0,
            Some(align) => align.split(' ').count(),
        }
    }

    pub fn has_frame(&self, side: FrameSide) -> bool {
        self.frame.contains(&side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_arguments() {
        assert_eq!(ColumnAlign::from_argument("l"), ColumnAlign::Left);
        assert_eq!(ColumnAlign::from_argument("c"), ColumnAlign::Center);
        assert_eq!(ColumnAlign::from_argument("r"), ColumnAlign::Right);
        assert_eq!(ColumnAlign::from_argument("x"), ColumnAlign::Unset);
        assert_eq!(ColumnAlign::from_argument(" l"), ColumnAlign::Unset);
        assert_eq!(ColumnAlign::Unset.as_str(), "");
    }

    #[test]
    fn test_num_cols_counts_unset_tokens() {
        let mut array = ArrayMetadata::new();
        assert_eq!(array.num_cols(), 0);
        array.arraydef.columnalign = Some("left  right".to_string());
        assert_eq!(array.num_cols(), 3);
    }

    #[test]
    fn test_has_frame() {
        let mut array = ArrayMetadata::new();
        assert!(!array.has_frame(FrameSide::Right));
        array.frame.push(FrameSide::Right);
        assert!(array.has_frame(FrameSide::Right));
        assert!(!array.has_frame(FrameSide::Left));
    }

    #[test]
    fn test_with_columns_presizes_ralign() {
        let array = ArrayMetadata::with_columns(4);
        assert_eq!(array.ralign.len(), 4);
        assert!(array.ralign.iter().all(Option::is_none));
    }
}
