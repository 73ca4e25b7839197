//! # colspec
//!
//! Column template parser for LaTeX-style `array` and `tabular` preambles.
//!
//! ## Features
//!
//! - **Full preamble grammar**: `l c r`, boxed `p m b` columns, `w`/`W`
//!   fixed-width columns, `|` and `:` rules, `>`/`<` cell material, `@`/`!`
//! - **Extended grammar**: `*{n}{cols}` repetition and `P`/`M`/`B` math columns
//! - **Typed errors**: every failure names the offending specifier and position
//! - **Diagnostics**: author-facing messages with suggested fixes
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use colspec::{parse_column_template, FrameSide};
//!
//! let array = parse_column_template("|l|p{3cm}|r|").unwrap();
//! assert_eq!(array.columnalign(), Some("left left right"));
//! assert_eq!(array.columnwidth(), Some("auto 3cm auto"));
//! assert_eq!(array.columnlines(), Some("solid solid"));
//! assert_eq!(array.frame, vec![FrameSide::Left, FrameSide::Right]);
//! ```
//!
//! ### Environment Sources
//!
//! ```rust
//! use colspec::environment::parse_environment;
//! use colspec::ColumnParserOptions;
//!
//! let (env, array) = parse_environment(
//!     r"\begin{array}{r:l} 1 & 2 \end{array}",
//!     &ColumnParserOptions::default(),
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(env.template, "r:l");
//! assert_eq!(array.columnlines(), Some("dashed"));
//! ```

/// Core parsing modules
pub mod core;

/// Data layer - static lookup tables
pub mod data;

/// Feature modules - dimension validation and environment extraction
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types
pub use crate::core::columns::{
    ArrayDef, ArrayMetadata, BorderIndex, ColumnAlign, ColumnBox, ColumnIndex, ColumnParser,
    ColumnParserOptions, ColumnState, FrameSide, LineStyle, Specifier, VerticalClass,
};

// Re-export feature modules
pub use features::dimension;
pub use features::environment;
pub use features::dimension::{is_valid_dimension, match_dimension, Dimension};

// Re-export data
pub use data::constants;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{ColumnError, ColumnResult, ErrorKind};

/// Parse a column template into fresh array metadata
///
/// # Arguments
/// * `template` - Column template, e.g. `|l|c|r|`
///
/// # Returns
/// The finalized array metadata, or the first parse error
pub fn parse_column_template(template: &str) -> ColumnResult<ArrayMetadata> {
    parse_column_template_with_options(template, &ColumnParserOptions::default())
}

/// Parse a column template with custom options
pub fn parse_column_template_with_options(
    template: &str,
    options: &ColumnParserOptions,
) -> ColumnResult<ArrayMetadata> {
    let mut array = ArrayMetadata::new();
    ColumnParser::with_options(options.clone()).process(template, &mut array)?;
    Ok(array)
}
