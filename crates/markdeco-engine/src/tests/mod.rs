//! Scenario tests over the full lex → parse pipeline.

use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    DecorationSpan, MarkKind, MarkSpan, NodeAttrs, NodeDescriptor, NodeKind, ParseResult, parse,
};
use crate::snapshot;

fn node(from: usize, to: usize, kind: NodeKind) -> NodeDescriptor {
    NodeDescriptor {
        from,
        to,
        kind,
        marks: Vec::new(),
        attrs: None,
    }
}

fn paragraph(from: usize, to: usize) -> NodeDescriptor {
    node(from, to, NodeKind::Paragraph)
}

fn item(from: usize, to: usize) -> NodeDescriptor {
    NodeDescriptor {
        attrs: Some(NodeAttrs::ListItem {
            checked: None,
            spread: false,
        }),
        ..node(from, to, NodeKind::ListItem)
    }
}

fn list(from: usize, to: usize, start: Option<u64>) -> NodeDescriptor {
    NodeDescriptor {
        attrs: Some(NodeAttrs::List {
            ordered: start.is_some(),
            spread: false,
            start,
        }),
        ..node(from, to, NodeKind::List)
    }
}

fn syntax(spans: &[(usize, usize)]) -> Vec<DecorationSpan> {
    spans
        .iter()
        .map(|&(from, to)| DecorationSpan::syntax(from, to))
        .collect()
}

fn checked_parse(source: &str) -> ParseResult {
    let result = parse(source);
    snapshot::invariants(&result);
    result
}

/// Run a fixture test for a given .md file.
/// Called by generated test functions (see build.rs).
fn fixture_test(name: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let input = std::fs::read_to_string(dir.join(format!("{name}.md"))).unwrap();
    let expected = std::fs::read_to_string(dir.join(format!("{name}.json"))).unwrap();
    let expected: ParseResult = serde_json::from_str(&expected).unwrap();

    assert_eq!(checked_parse(&input), expected);
}

// Generated by build.rs - one test per .md file in tests/fixtures/
include!(concat!(env!("OUT_DIR"), "/fixture_tests.rs"));

#[test]
fn plain_paragraph() {
    let result = checked_parse("foo");
    assert_eq!(result.nodes, vec![paragraph(0, 5)]);
    assert!(result.decorations.is_empty());
}

#[test]
fn empty_input() {
    assert_eq!(checked_parse(""), ParseResult::default());
}

#[rstest]
#[case("**foo**", MarkKind::Strong, 9, &[(1, 3), (6, 8)])]
#[case("__foo__", MarkKind::Strong, 9, &[(1, 3), (6, 8)])]
#[case("*foo*", MarkKind::Emphasis, 7, &[(1, 2), (5, 6)])]
#[case("_foo_", MarkKind::Emphasis, 7, &[(1, 2), (5, 6)])]
#[case("~~foo~~", MarkKind::Delete, 9, &[(1, 3), (6, 8)])]
#[case("`foo`", MarkKind::InlineCode, 7, &[(1, 2), (5, 6)])]
fn inline_marks(
    #[case] source: &str,
    #[case] kind: MarkKind,
    #[case] to: usize,
    #[case] decorations: &[(usize, usize)],
) {
    let result = checked_parse(source);
    assert_eq!(
        result.nodes,
        vec![NodeDescriptor {
            marks: vec![MarkSpan::new(1, to - 1, kind)],
            ..paragraph(0, to)
        }]
    );
    assert_eq!(result.decorations, syntax(decorations));
}

#[rstest]
fn atx_headings(#[values(1, 2, 3, 4, 5, 6)] level: usize) {
    let source = format!("{} foo", "#".repeat(level));
    let result = checked_parse(&source);
    assert_eq!(
        result.nodes,
        vec![NodeDescriptor {
            attrs: Some(NodeAttrs::Heading { level: level as u8 }),
            ..node(0, source.len() + 2, NodeKind::Heading)
        }]
    );
    assert_eq!(result.decorations, syntax(&[(0, level + 2)]));
}

#[rstest]
#[case("# foo **bar**", MarkKind::Strong, 15, (7, 14), &[(7, 9), (12, 14), (0, 3)])]
#[case("# foo *bar*", MarkKind::Emphasis, 13, (7, 12), &[(7, 8), (11, 12), (0, 3)])]
fn heading_with_inline_mark(
    #[case] source: &str,
    #[case] kind: MarkKind,
    #[case] to: usize,
    #[case] mark: (usize, usize),
    #[case] decorations: &[(usize, usize)],
) {
    let result = checked_parse(source);
    assert_eq!(
        result.nodes,
        vec![NodeDescriptor {
            marks: vec![MarkSpan::new(mark.0, mark.1, kind)],
            attrs: Some(NodeAttrs::Heading { level: 1 }),
            ..node(0, to, NodeKind::Heading)
        }]
    );
    assert_eq!(result.decorations, syntax(decorations));
}

#[test]
fn heading_decorates_one_space_after_hashes() {
    let result = checked_parse("#   foo");
    assert_eq!(
        result.nodes,
        vec![NodeDescriptor {
            attrs: Some(NodeAttrs::Heading { level: 1 }),
            ..node(0, 9, NodeKind::Heading)
        }]
    );
    assert_eq!(result.decorations, syntax(&[(0, 3)]));
}

#[test]
fn extra_heading_spaces_shift_inline_marks() {
    let result = checked_parse("#   **foo**");
    assert_eq!(
        result.nodes,
        vec![NodeDescriptor {
            marks: vec![MarkSpan::new(5, 12, MarkKind::Strong)],
            attrs: Some(NodeAttrs::Heading { level: 1 }),
            ..node(0, 13, NodeKind::Heading)
        }]
    );
    assert_eq!(result.decorations, syntax(&[(5, 7), (10, 12), (0, 3)]));
}

#[test]
fn tab_indented_child_list_nests() {
    let result = checked_parse("- a\n\t- b");
    assert_eq!(
        result.nodes,
        vec![
            paragraph(2, 7),
            paragraph(9, 15),
            item(8, 16),
            list(7, 17, None),
            item(1, 18),
            list(0, 19, None),
        ]
    );
    assert_eq!(result.decorations, syntax(&[(9, 13), (2, 5)]));
}

#[test]
fn blockquote() {
    let result = checked_parse("> foo");
    assert_eq!(
        result.nodes,
        vec![paragraph(1, 8), node(0, 9, NodeKind::Blockquote)]
    );
    assert_eq!(result.decorations, syntax(&[(1, 4)]));
}

#[test]
fn nested_blockquote() {
    let result = checked_parse(">> foo");
    assert_eq!(
        result.nodes,
        vec![
            paragraph(2, 10),
            node(1, 11, NodeKind::Blockquote),
            node(0, 12, NodeKind::Blockquote),
        ]
    );
    assert_eq!(result.decorations, syntax(&[(2, 6), (1, 4)]));
}

#[rstest]
fn single_bullet_item(#[values("*", "-", "+")] bullet: &str) {
    let result = checked_parse(&format!("{bullet} foo"));
    assert_eq!(
        result.nodes,
        vec![paragraph(2, 9), item(1, 10), list(0, 11, None)]
    );
    assert_eq!(result.decorations, syntax(&[(2, 5)]));
}

#[rstest]
fn three_bullet_items(#[values("*", "-", "+")] bullet: &str) {
    let result = checked_parse(&format!("{bullet} foo\n{bullet} bar\n{bullet} baz"));
    assert_eq!(
        result.nodes,
        vec![
            paragraph(2, 9),
            item(1, 10),
            paragraph(11, 18),
            item(10, 19),
            paragraph(20, 27),
            item(19, 28),
            list(0, 29, None),
        ]
    );
    assert_eq!(result.decorations, syntax(&[(2, 5), (11, 14), (20, 23)]));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(99)]
fn single_ordered_item(#[case] number: u64) {
    let digits = number.to_string().len();
    let result = checked_parse(&format!("{number}. foo"));
    assert_eq!(
        result.nodes,
        vec![
            paragraph(2, 9 + digits),
            item(1, 10 + digits),
            list(0, 11 + digits, Some(number)),
        ]
    );
    assert_eq!(result.decorations, syntax(&[(2, 5 + digits)]));
}

#[test]
fn ordered_list_from_zero() {
    let result = checked_parse("0. foo\n1. bar\n2. baz");
    assert_eq!(
        result.nodes,
        vec![
            paragraph(2, 10),
            item(1, 11),
            paragraph(12, 20),
            item(11, 21),
            paragraph(22, 30),
            item(21, 31),
            list(0, 32, Some(0)),
        ]
    );
    assert_eq!(result.decorations, syntax(&[(2, 6), (12, 16), (22, 26)]));
}

#[test]
fn ordered_start_comes_from_first_item() {
    let result = checked_parse("7. foo\n10. bar\n3. baz");
    let list = result.nodes.last().unwrap();
    assert_eq!(
        list.attrs,
        Some(NodeAttrs::List {
            ordered: true,
            spread: false,
            start: Some(7),
        })
    );
}

#[test]
fn mismatched_ordinals_keep_raw_marker_widths() {
    let result = checked_parse("7. foo\n10. bar\n3. baz");
    assert_eq!(
        result.nodes,
        vec![
            paragraph(2, 10),
            item(1, 11),
            paragraph(12, 21),
            item(11, 22),
            paragraph(23, 31),
            item(22, 32),
            list(0, 33, Some(7)),
        ]
    );
}

#[test]
fn empty_blockquote_keeps_its_marker() {
    let result = checked_parse(">");
    assert_eq!(
        result.nodes,
        vec![paragraph(1, 4), node(0, 5, NodeKind::Blockquote)]
    );
    assert_eq!(result.decorations, syntax(&[(1, 3)]));
}

#[test]
fn code_block_is_skipped_but_occupies_positions() {
    let result = checked_parse("```\ncode\n```\n\nfoo");
    assert_eq!(result.nodes, vec![paragraph(12, 17)]);
    assert!(result.decorations.is_empty());
}

#[test]
fn blocks_separated_by_blank_line() {
    let result = checked_parse("# a\n\nb");
    assert_eq!(
        result.nodes,
        vec![
            NodeDescriptor {
                attrs: Some(NodeAttrs::Heading { level: 1 }),
                ..node(0, 5, NodeKind::Heading)
            },
            paragraph(5, 8),
        ]
    );
}

#[test]
fn loose_list_is_spread() {
    let result = checked_parse("- a\n\n- b");
    let spreads: Vec<_> = result
        .nodes
        .iter()
        .filter_map(|n| match n.attrs {
            Some(NodeAttrs::ListItem { spread, .. }) | Some(NodeAttrs::List { spread, .. }) => {
                Some(spread)
            }
            _ => None,
        })
        .collect();
    assert_eq!(spreads, vec![true, true, true]);
}

#[test]
fn quote_opened_on_continuation_line() {
    let result = checked_parse("> foo\n> > bar");
    insta::assert_snapshot!(snapshot::normalize(&result), @r"
    nodes:
      paragraph 1..8
      paragraph 9..18
      blockquote 8..19
      blockquote 0..20
    decorations:
      9..14
      1..4
    ");
}

#[rstest]
#[case("foo")]
#[case("**foo** _bar_")]
#[case("# foo *bar*")]
#[case("> foo")]
#[case(">> foo")]
#[case("* foo")]
#[case("99. foo")]
#[case("> * [ ] foo")]
#[case("- > foo")]
#[case("- # foo")]
fn coordinate_law_on_single_line(#[case] source: &str) {
    let result = checked_parse(source);
    let root = result.nodes.last().unwrap();
    assert_eq!(root.to - root.from, source.len() + 2 * result.nodes.len());
}

#[test]
fn coordinate_law_counts_line_breaks_inside_text() {
    let source = "> foo\n> bar";
    let result = checked_parse(source);
    let root = result.nodes.last().unwrap();
    assert_eq!(root.to - root.from, source.len() + 2 * result.nodes.len());
}

#[rstest]
#[case("**foo**")]
#[case("* a\n  * b\n\n> c")]
#[case("1. x\n2. y")]
fn parsing_is_idempotent(#[case] source: &str) {
    assert_eq!(parse(source), parse(source));
}
