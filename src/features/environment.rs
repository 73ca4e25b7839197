//! Column template extraction from environment sources
//!
//! Finds the first array-like `\begin{...}` in a LaTeX fragment and pulls
//! out its column template, e.g. `|l|c|` from `\begin{array}{|l|c|} ...`.

use crate::core::columns::{ArrayMetadata, ColumnParser, ColumnParserOptions};
use crate::utils::error::ColumnResult;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BEGIN_ENV: Regex = Regex::new(
        r"\\begin\s*\{(array|darray|subarray|tabular\*?|tabularx|longtable)\}"
    )
    .unwrap();
}

/// A column template found in an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvTemplate {
    /// Environment name, e.g. `array` or `tabular*`
    pub name: String,
    /// Column template without its braces
    pub template: String,
    /// Byte offset of the template's first character in the source
    pub offset: usize,
}

impl EnvTemplate {
    /// Whether the environment takes a width argument before the template
    pub fn has_width_argument(&self) -> bool {
        takes_width(&self.name)
    }
}

fn takes_width(name: &str) -> bool {
    name == "tabular*" || name == "tabularx"
}

/// Extract the column template of the first recognised environment
pub fn extract_template(source: &str) -> Option<EnvTemplate> {
    let caps = BEGIN_ENV.captures(source)?;
    let name = caps[1].to_string();
    let mut pos = caps.get(0)?.end();

    if takes_width(&name) {
        pos = skip_ws(source, pos);
        pos = find_matching_brace(source, pos)? + 1;
    }

    // Optional [pos] argument
    pos = skip_ws(source, pos);
    if source[pos..].starts_with('[') {
        pos += source[pos..].find(']')? + 1;
    }

    pos = skip_ws(source, pos);
    let end = find_matching_brace(source, pos)?;
    Some(EnvTemplate {
        name,
        template: source[pos + 1..end].to_string(),
        offset: pos + 1,
    })
}

/// Extract and parse the column template of the first recognised environment
///
/// Returns `Ok(None)` when the source has no recognised environment.
pub fn parse_environment(
    source: &str,
    options: &ColumnParserOptions,
) -> ColumnResult<Option<(EnvTemplate, ArrayMetadata)>> {
    let Some(env) = extract_template(source) else {
        return Ok(None);
    };
    let mut array = ArrayMetadata::new();
    ColumnParser::with_options(options.clone()).process(&env.template, &mut array)?;
    Ok(Some((env, array)))
}

fn skip_ws(s: &str, pos: usize) -> usize {
    let rest = &s[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

/// Byte position of the brace closing the group opened at `open`
fn find_matching_brace(s: &str, open: usize) -> Option<usize> {
    if !s[open..].starts_with('{') {
        return None;
    }
    let mut depth = 0;
    let mut escaped = false;
    for (i, c) in s[open..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_template() {
        let env = extract_template(r"\begin{array}{|l|c|} a & b \end{array}").unwrap();
        assert_eq!(env.name, "array");
        assert_eq!(env.template, "|l|c|");
        assert_eq!(env.offset, 14);
    }

    #[test]
    fn test_position_argument() {
        let env = extract_template(r"\begin{tabular}[t]{lp{2cm}}").unwrap();
        assert_eq!(env.template, "lp{2cm}");
    }

    #[test]
    fn test_width_argument() {
        let env = extract_template(r"\begin{tabularx}{\linewidth}{l X}").unwrap();
        assert!(env.has_width_argument());
        assert_eq!(env.template, "l X");

        let env = extract_template(r"\begin{tabular*}{10cm}{@{}lr@{}}").unwrap();
        assert_eq!(env.name, "tabular*");
        assert_eq!(env.template, "@{}lr@{}");
    }

    #[test]
    fn test_no_environment() {
        assert_eq!(extract_template(r"\begin{matrix} a \end{matrix}"), None);
        assert_eq!(extract_template(r"\begin{array}"), None);
        assert_eq!(extract_template(r"\begin{array}{ll"), None);
    }

    #[test]
    fn test_parse_environment() {
        let (env, array) = parse_environment(
            r"\begin{array}{r:l} 1 & 2 \end{array}",
            &ColumnParserOptions::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(env.template, "r:l");
        assert_eq!(array.columnalign(), Some("right left"));
        assert_eq!(array.columnlines(), Some("dashed"));

        let none = parse_environment("x + y", &ColumnParserOptions::default()).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_parse_environment_propagates_errors() {
        let result = parse_environment(
            r"\begin{tabularx}{\linewidth}{l X}",
            &ColumnParserOptions::default(),
        );
        assert!(result.is_err());
    }
}
