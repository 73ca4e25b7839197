//! WASM bindings for colspec
//!
//! This module provides JavaScript-accessible functions for column template parsing.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{ArrayMetadata, ColumnParserOptions};

/// Parse options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// Accept `*{n}{cols}` and the `P`/`M`/`B` columns
    #[serde(default = "default_true")]
    pub extended: bool,
    /// Maximum number of dispatched specifiers
    #[serde(default = "default_max_columns")]
    pub max_columns: usize,
}

#[cfg(feature = "wasm")]
impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            extended: true,
            max_columns: default_max_columns(),
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
fn default_max_columns() -> usize {
    ColumnParserOptions::default().max_columns
}

/// Parse error details (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ParseErrorInfo {
    /// Stable error identifier, e.g. `BadColumnCharacter`
    pub kind: String,
    /// Rendered message
    pub message: String,
    /// Codepoint offset into the template
    pub offset: usize,
}

/// Parse result with metadata or error
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ParseResult {
    /// Whether the template was accepted
    pub success: bool,
    /// Finalized metadata on success
    pub metadata: Option<ArrayMetadata>,
    /// Error details on failure
    pub error: Option<ParseErrorInfo>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse a column template
///
/// # Arguments
/// * `template` - Column template, e.g. `|l|c|r|`
/// * `options` - Optional `{ extended, maxColumns }` object
///
/// # Returns
/// `{ success, metadata, error }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseColumnTemplate")]
pub fn parse_column_template_wasm(template: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let opts: ParseOptions = if options.is_undefined() || options.is_null() {
        ParseOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_default()
    };
    let parser_opts = ColumnParserOptions {
        max_columns: opts.max_columns,
        extended: opts.extended,
    };

    let result = match crate::parse_column_template_with_options(template, &parser_opts) {
        Ok(metadata) => ParseResult {
            success: true,
            metadata: Some(metadata),
            error: None,
        },
        Err(err) => ParseResult {
            success: false,
            metadata: None,
            error: Some(ParseErrorInfo {
                kind: err.kind().id().to_string(),
                message: err.to_string(),
                offset: err.offset(),
            }),
        },
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check whether a string is a valid column width
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "isValidDimension")]
pub fn is_valid_dimension_wasm(text: &str) -> bool {
    crate::is_valid_dimension(text)
}

/// Check a template and return formatted diagnostics
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkColumnTemplate")]
pub fn check_column_template_wasm(template: &str) -> String {
    let result = crate::diagnostics::check_template(template, &ColumnParserOptions::default());
    crate::diagnostics::format_diagnostics(&result, false)
}
