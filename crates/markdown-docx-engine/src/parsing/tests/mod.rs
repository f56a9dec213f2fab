//! Integration tests for the parsing module.
//!
//! Uses snapshot testing over a line-oriented rendering of the records.
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::BlockRecord,
    inline::{Span, SpanKind, tokenize},
    parse_document,
};

// Fixture-based snapshot tests

#[test]
fn fixture_research_note() {
    assert_fixture("research_note");
}

#[test]
fn fixture_edge_cases() {
    assert_fixture("edge_cases");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md);
    invariants::check(&doc.blocks);

    let snap = normalize::normalize(&doc.blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Behaviour tests

#[test]
fn heading_then_inline_paragraph() {
    let doc = parse_document("## Title\n\nSome **bold** and `code`.\n");
    assert_eq!(
        doc.blocks,
        vec![
            BlockRecord::Heading {
                level: 1,
                text: "Title".to_string()
            },
            BlockRecord::Paragraph {
                spans: vec![
                    Span::plain("Some "),
                    Span::bold("bold"),
                    Span::plain(" and "),
                    Span::code("code"),
                    Span::plain("."),
                ]
            },
        ]
    );
}

#[rstest]
#[case("# One", 0, "One")]
#[case("## Two", 1, "Two")]
#[case("### Three", 2, "Three")]
#[case("#### Four", 3, "Four")]
#[case("   ##   Spaced out   ", 1, "Spaced out")]
fn heading_level_is_hash_count_minus_one(
    #[case] line: &str,
    #[case] level: u8,
    #[case] text: &str,
) {
    let doc = parse_document(line);
    assert_eq!(
        doc.blocks,
        vec![BlockRecord::Heading {
            level,
            text: text.to_string()
        }]
    );
}

#[test]
fn three_line_table() {
    let doc = parse_document("| A | B |\n|---|---|\n| 1 | 2 |");
    assert_eq!(
        doc.blocks,
        vec![BlockRecord::Table {
            rows: vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ]
        }]
    );
}

#[test]
fn fenced_code_lines_are_never_paragraphs() {
    let doc = parse_document("```\nhello\nworld\n```");
    assert_eq!(
        doc.blocks,
        vec![BlockRecord::CodeBlock {
            text: "hello\nworld".to_string()
        }]
    );
}

#[test]
fn bullet_recognizes_bold_but_not_code() {
    let doc = parse_document("- **Name:** value with `tick`");
    assert_eq!(
        doc.blocks,
        vec![BlockRecord::BulletItem {
            spans: vec![
                Span::plain(""),
                Span::bold("Name:"),
                Span::plain(" value with `tick`"),
            ]
        }]
    );
}

#[test]
fn numbered_and_metadata_lines_keep_backticks_literal() {
    let doc = parse_document("1. run `make`\n**Tool:** `make`");
    for block in &doc.blocks {
        match block {
            BlockRecord::NumberedItem { spans } | BlockRecord::MetadataLine { spans } => {
                assert!(spans.iter().all(|s| s.kind != SpanKind::InlineCode));
                assert!(spans.iter().any(|s| s.text.contains("`make`")));
            }
            other => panic!("unexpected block {other:?}"),
        }
    }
    assert_eq!(doc.blocks.len(), 2);
}

#[test]
fn every_non_blank_line_lands_in_one_record() {
    let md = "Para one\n\n- a\n- b\n\n1. c\n---\n**K:** v\ntext";
    let doc = parse_document(md);
    let kinds: Vec<&str> = doc.blocks.iter().map(BlockRecord::kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "Paragraph",
            "BulletItem",
            "BulletItem",
            "NumberedItem",
            "HorizontalRule",
            "MetadataLine",
            "Paragraph",
        ]
    );
}

#[test]
fn retokenizing_record_text_adds_no_styles() {
    let doc = parse_document("Mixed **bold** and `code` text\n- **Key:** item");
    for block in &doc.blocks {
        if let BlockRecord::Paragraph { spans } | BlockRecord::BulletItem { spans } = block {
            for span in spans {
                let again = tokenize(&span.text, true);
                assert_eq!(again, vec![Span::plain(span.text.clone())]);
            }
        }
    }
}

#[test]
fn crlf_lines_keep_working() {
    let doc = parse_document("# Title\r\n\r\n- item\r\n");
    assert_eq!(
        doc.blocks,
        vec![
            BlockRecord::Heading {
                level: 0,
                text: "Title".to_string()
            },
            BlockRecord::BulletItem {
                spans: vec![Span::plain("item")]
            },
        ]
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let doc = parse_document("");
    assert!(doc.blocks.is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n\n");
    assert!(doc.blocks.is_empty());
}
