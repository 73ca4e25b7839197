//! Regression tests for column template parsing

use super::*;
use crate::utils::error::ErrorKind;
use pretty_assertions::assert_eq;

fn parse(template: &str) -> ArrayMetadata {
    let mut array = ArrayMetadata::new();
    ColumnParser::new()
        .process(template, &mut array)
        .unwrap_or_else(|e| panic!("'{}' failed: {}", template, e));
    array
}

fn parse_err(template: &str) -> ColumnError {
    let mut array = ArrayMetadata::new();
    ColumnParser::new()
        .process(template, &mut array)
        .expect_err(template)
}

#[test]
fn test_simple_alignments() {
    let array = parse("lcrrl");
    assert_eq!(array.columnalign(), Some("left center right right left"));
    assert_eq!(array.columnwidth(), None);
    assert_eq!(array.columnlines(), None);
    assert!(array.frame.is_empty());
    assert!(!array.dashed);
}

#[test]
fn test_empty_template_sets_columnalign() {
    let array = parse("");
    assert_eq!(array.columnalign(), Some(""));
    assert_eq!(array.num_cols(), 0);
}

#[test]
fn test_spaces_are_ignored() {
    let array = parse(" l  c ");
    assert_eq!(array.columnalign(), Some("left center"));
}

#[test]
fn test_full_frame() {
    let array = parse("|l|c|r|");
    assert_eq!(array.columnalign(), Some("left center right"));
    assert_eq!(array.frame, vec![FrameSide::Left, FrameSide::Right]);
    assert!(!array.dashed);
    // Interior rules stay in columnlines; the outer ones become the frame
    assert_eq!(array.columnlines(), Some("solid solid"));
}

#[test]
fn test_dashed_interior_rule() {
    let array = parse("l:c");
    assert_eq!(array.columnlines(), Some("dashed"));
    assert!(array.frame.is_empty());
}

#[test]
fn test_dashed_left_frame() {
    let array = parse(":lc");
    assert_eq!(array.frame, vec![FrameSide::Left]);
    assert!(array.dashed);
    assert_eq!(array.columnlines(), Some("none"));
}

#[test]
fn test_right_frame_only() {
    let array = parse("lcr|");
    assert_eq!(array.frame, vec![FrameSide::Right]);
    assert!(!array.dashed);
    assert_eq!(array.columnlines(), Some("none none"));
}

#[test]
fn test_left_frame_pads_all_interior_lines() {
    let array = parse("|lcr");
    assert_eq!(array.frame, vec![FrameSide::Left]);
    assert_eq!(array.columnlines(), Some("none none"));
}

#[test]
fn test_mixed_rules() {
    let array = parse("l|c:r");
    assert_eq!(array.columnlines(), Some("solid dashed"));
    assert!(array.frame.is_empty());
}

#[test]
fn test_rule_without_columns() {
    let array = parse("|");
    assert_eq!(array.columnalign(), Some(""));
    assert_eq!(array.frame, vec![FrameSide::Left, FrameSide::Right]);
    assert_eq!(array.columnlines(), Some(""));
}

#[test]
fn test_paragraph_column() {
    let array = parse("p{3cm}c");
    assert_eq!(array.columnalign(), Some("left center"));
    assert_eq!(array.columnwidth(), Some("3cm auto"));
    assert_eq!(
        array.ralign[0],
        Some(ColumnBox::new(VerticalClass::Top, "3cm", ColumnAlign::Left))
    );
    assert_eq!(array.ralign.len(), 1);
}

#[test]
fn test_paragraph_vertical_classes() {
    let array = parse("p{1em}m{2em}b{3em}");
    let classes: Vec<_> = array
        .ralign
        .iter()
        .map(|c| c.as_ref().map(|c| c.vertical))
        .collect();
    assert_eq!(
        classes,
        vec![
            Some(VerticalClass::Top),
            Some(VerticalClass::Center),
            Some(VerticalClass::Bottom)
        ]
    );
    assert_eq!(array.columnwidth(), Some("1em 2em 3em"));
}

#[test]
fn test_width_between_plain_columns() {
    let array = parse("lp{2cm}r");
    assert_eq!(array.columnwidth(), Some("auto 2cm auto"));
    assert_eq!(array.ralign[0], None);
    assert!(array.ralign[1].is_some());
}

#[test]
fn test_single_token_width_is_not_a_dimension() {
    let err = parse_err("p3cm");
    assert_eq!(err.kind(), ErrorKind::MissingColumnDimOrUnits);
    assert_eq!(err.token(), Some('p'));
}

#[test]
fn test_wide_column_reads_alignment() {
    let array = parse("w{c}{2cm}W{r}{1in}");
    assert_eq!(array.columnalign(), Some("center right"));
    assert_eq!(array.columnwidth(), Some("2cm 1in"));
    assert_eq!(
        array.ralign[1],
        Some(ColumnBox::new(VerticalClass::Top, "1in", ColumnAlign::Right))
    );
}

#[test]
fn test_wide_column_single_token_alignment() {
    let array = parse("wl{5pt}");
    assert_eq!(array.columnalign(), Some("left"));
}

#[test]
fn test_wide_column_unknown_alignment() {
    let array = parse("w{x}{2cm}c");
    assert_eq!(array.columnalign(), Some(" center"));
    assert_eq!(
        array.ralign[0].as_ref().map(|c| c.align),
        Some(ColumnAlign::Unset)
    );
}

#[test]
fn test_spaces_before_arguments() {
    let array = parse("p {3cm} w {l} {1em}");
    assert_eq!(array.columnwidth(), Some("3cm 1em"));
}

#[test]
fn test_braced_width_with_keyword() {
    let array = parse(r"p{0.3\linewidth}l");
    assert_eq!(array.columnwidth(), Some(r"0.3\linewidth auto"));
}

#[test]
fn test_prefix_and_suffix_material() {
    let array = parse(r">{\bfseries}l<{\quad}c<{!}");
    assert_eq!(array.columnalign(), Some("left center"));
    assert_eq!(array.cstart, vec![r"\bfseries".to_string()]);
    assert_eq!(array.cend, vec![r"\quad".to_string(), "!".to_string()]);
}

#[test]
fn test_prefix_material_accumulates() {
    let array = parse(">{a}>{b}l");
    assert_eq!(array.cstart, vec!["ab".to_string()]);
}

#[test]
fn test_spacing_arguments_are_dropped() {
    let array = parse(r"l@{\hspace{1em}}c!{x}r");
    assert_eq!(array.columnalign(), Some("left center right"));
    assert_eq!(array.columnlines(), None);
    assert!(array.cstart.is_empty());
}

#[test]
fn test_suffix_before_any_column() {
    let err = parse_err("<{x}l");
    assert_eq!(err.kind(), ErrorKind::MissingColumnForSuffix);
    assert_eq!(err.offset(), 0);
}

#[test]
fn test_suffix_missing_argument_reported_first() {
    let err = parse_err("<");
    assert_eq!(err.kind(), ErrorKind::MissingArgForColumn);
}

#[test]
fn test_bad_column_character() {
    let err = parse_err("x");
    assert_eq!(
        err,
        ColumnError::BadColumnCharacter {
            token: 'x',
            offset: 0
        }
    );
    assert_eq!(err.to_string(), "Illegal pream-token (x)");
}

#[test]
fn test_bad_character_after_columns() {
    let err = parse_err("lc|Q");
    assert_eq!(
        err,
        ColumnError::BadColumnCharacter {
            token: 'Q',
            offset: 3
        }
    );
}

#[test]
fn test_non_ascii_bad_character() {
    let err = parse_err("lé");
    assert_eq!(err.token(), Some('é'));
    assert_eq!(err.offset(), 1);
}

#[test]
fn test_invalid_dimension() {
    let err = parse_err("p{nope}");
    assert_eq!(err.kind(), ErrorKind::MissingColumnDimOrUnits);
    assert_eq!(
        err.to_string(),
        "Missing dimension or its units for p column declaration"
    );
}

#[test]
fn test_wide_invalid_dimension_names_specifier() {
    let err = parse_err("W{c}{12}");
    assert_eq!(err.kind(), ErrorKind::MissingColumnDimOrUnits);
    assert_eq!(err.token(), Some('W'));
}

#[test]
fn test_missing_argument() {
    let err = parse_err("p");
    assert_eq!(
        err,
        ColumnError::MissingArgForColumn {
            column: 'p',
            offset: 1
        }
    );
}

#[test]
fn test_missing_width_after_alignment() {
    let err = parse_err("w{l}  ");
    assert_eq!(err.kind(), ErrorKind::MissingArgForColumn);
    assert_eq!(err.token(), Some('w'));
}

#[test]
fn test_missing_close_brace() {
    let err = parse_err("lp{3cm");
    assert_eq!(err.kind(), ErrorKind::MissingCloseBrace);
}

#[test]
fn test_escaped_close_brace_is_not_a_close() {
    let err = parse_err(r">{\}l");
    assert_eq!(err.kind(), ErrorKind::MissingCloseBrace);
}

#[test]
fn test_error_leaves_array_untouched() {
    let mut array = ArrayMetadata::new();
    let result = ColumnParser::new().process("|l|c|x", &mut array);
    assert!(result.is_err());
    assert_eq!(array, ArrayMetadata::new());
}

#[test]
fn test_presized_ralign_is_filled_in_place() {
    let mut array = ArrayMetadata::with_columns(3);
    ColumnParser::new()
        .process("lm{1cm}r", &mut array)
        .unwrap();
    assert_eq!(array.ralign.len(), 3);
    assert_eq!(array.ralign[0], None);
    assert_eq!(
        array.ralign[1],
        Some(ColumnBox::new(VerticalClass::Center, "1cm", ColumnAlign::Left))
    );
    assert_eq!(array.ralign[2], None);
}

#[test]
fn test_repeated_parse_is_identical() {
    let template = r"|>{x}p{2cm}:c|w{r}{1in}|";
    let first = parse(template);
    for _ in 0..3 {
        assert_eq!(parse(template), first);
    }
}

// ============================================================================
// Extended grammar
// ============================================================================

#[test]
fn test_repetition() {
    let array = parse("|*{3}{c|}");
    assert_eq!(array.columnalign(), Some("center center center"));
    assert_eq!(array.frame, vec![FrameSide::Left, FrameSide::Right]);
    assert_eq!(array.columnlines(), Some("solid solid"));
}

#[test]
fn test_repetition_with_paragraph_columns() {
    let array = parse("*{2}{p{1cm}}l");
    assert_eq!(array.columnwidth(), Some("1cm 1cm auto"));
}

#[test]
fn test_nested_repetition() {
    let array = parse("*{2}{*{2}{l}r}");
    assert_eq!(array.columnalign(), Some("left left right left left right"));
}

#[test]
fn test_zero_repetition() {
    let array = parse("l*{0}{c}r");
    assert_eq!(array.columnalign(), Some("left right"));
}

#[test]
fn test_repetition_count_must_be_a_number() {
    let err = parse_err("*{x}{c}");
    assert_eq!(
        err,
        ColumnError::ColArgNotNum {
            column: '*',
            argument: "x".to_string(),
            offset: 0
        }
    );
    assert_eq!(parse_err("*{-1}{c}").kind(), ErrorKind::ColArgNotNum);
    assert_eq!(parse_err("*{}{c}").kind(), ErrorKind::ColArgNotNum);
}

#[test]
fn test_repetition_over_limit() {
    let parser = ColumnParser::with_options(ColumnParserOptions {
        max_columns: 10,
        ..Default::default()
    });
    let mut array = ArrayMetadata::new();
    let err = parser.process("*{11}{c}", &mut array).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MaxColumns);

    let err = parser.process("*{6}{*{6}{c}}", &mut array).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MaxColumns);
    assert_eq!(array, ArrayMetadata::new());
}

#[test]
fn test_macro_columns() {
    let array = parse("P{2cm}M{1em}B{3pt}");
    assert_eq!(array.columnalign(), Some("left left left"));
    assert_eq!(array.columnwidth(), Some("2cm 1em 3pt"));
    assert_eq!(array.cstart, vec!["$", "$", "$"]);
    assert_eq!(array.cend, vec!["$", "$", "$"]);
    assert_eq!(
        array.ralign[1].as_ref().map(|c| c.vertical),
        Some(VerticalClass::Center)
    );
}

#[test]
fn test_macro_column_invalid_width() {
    let err = parse_err("P{wide}");
    assert_eq!(err.kind(), ErrorKind::MissingColumnDimOrUnits);
    assert_eq!(err.token(), Some('P'));
    assert_eq!(err.offset(), 0);
    assert_eq!(
        err.to_string(),
        "Missing dimension or its units for P column declaration"
    );
}

#[test]
fn test_repeated_macro_column_names_macro() {
    let err = parse_err("l*{2}{M{1cm}}B{}");
    assert_eq!(err.token(), Some('B'));
    assert_eq!(err.offset(), 13);
}

#[test]
fn test_error_offsets_point_into_written_template() {
    for (template, expected) in [
        ("*{3}{c}x", Some('x')),
        ("*{9}{l}x", Some('x')),
        ("l*{2}{c|}Q", Some('Q')),
        ("P{1cm}:y", Some('y')),
        ("*{2}{c}*{2}{r}?", Some('?')),
        ("*{2}{w{l}{1cm}}w{l}{bad}", None),
    ] {
        let err = parse_err(template);
        let at = template.chars().nth(err.offset());
        assert_eq!(at, expected, "template '{}'", template);
        assert!(err.offset() <= template.chars().count());
    }
}

#[test]
fn test_error_inside_repetition_points_at_star() {
    let err = parse_err("l*{2}{x}");
    assert_eq!(
        err,
        ColumnError::BadColumnCharacter {
            token: 'x',
            offset: 1
        }
    );
}

#[test]
fn test_missing_argument_after_expansion_points_at_end() {
    let err = parse_err("*{3}{c}p");
    assert_eq!(err.kind(), ErrorKind::MissingArgForColumn);
    assert_eq!(err.offset(), 8);
}

#[test]
fn test_oversized_repetition_count() {
    let err = parse_err("*{99999999999999999999}{c}");
    assert_eq!(err.kind(), ErrorKind::MaxColumns);
    assert_eq!(err.offset(), 0);
}

#[test]
fn test_strict_options_reject_extended_grammar() {
    let parser = ColumnParser::with_options(ColumnParserOptions::strict());
    let mut array = ArrayMetadata::new();
    for (template, token) in [("*{2}{c}", '*'), ("P{1cm}", 'P'), ("lM{1cm}", 'M')] {
        let err = parser.process(template, &mut array).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadColumnCharacter);
        assert_eq!(err.token(), Some(token));
    }
    parser.process("|l|p{1cm}|", &mut array).unwrap();
    assert_eq!(array.columnalign(), Some("left left"));
}

#[test]
fn test_specifier_budget() {
    let parser = ColumnParser::with_options(ColumnParserOptions {
        max_columns: 4,
        ..Default::default()
    });
    let mut array = ArrayMetadata::new();
    parser.process("lcrl", &mut array).unwrap();
    let err = parser.process("lcrlc", &mut array).unwrap_err();
    assert_eq!(
        err,
        ColumnError::MaxColumns {
            limit: 4,
            offset: 4
        }
    );
}
