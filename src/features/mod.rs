//! Feature modules
//!
//! This module contains the collaborators of the column parser:
//! - Dimension syntax validation for column widths
//! - Column template extraction from `array`/`tabular` environments

pub mod dimension;
pub mod environment;

// Re-export commonly used types
pub use dimension::{is_valid_dimension, match_dimension, Dimension};
pub use environment::{extract_template, parse_environment, EnvTemplate};
