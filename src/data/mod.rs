//! Data layer - Static lookup tables
//!
//! This module contains the static data used by the column parser:
//! - Dimension units
//! - Built-in macro column bodies
//! - Specifier descriptions

pub mod constants;

// Re-export commonly used items
pub use constants::{DimensionUnit, DIMENSION_UNITS, MACRO_COLUMNS, SPECIFIER_HELP};
