//! Core parsing modules
//!
//! This module contains the column template parser:
//! - `columns`: scanner, specifier dispatch and finalization into array metadata

pub mod columns;

// Re-export main types
pub use columns::{
    ArrayDef, ArrayMetadata, ColumnAlign, ColumnBox, ColumnParser, ColumnParserOptions,
    ColumnState, FrameSide, LineStyle, Specifier, VerticalClass,
};
