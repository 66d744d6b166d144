//! Markdown text renderer.
//!
//! Walks a `Document` depth-first and turns every block into one or more
//! output units. Tables and code blocks are single multi-line units; the
//! document is all units joined by the configured line terminator.

use crate::config::RenderConfig;
use crate::layout::{ListMarkers, TableLayout, list_indent};
use crate::types::{Block, Document, List, Table};

/// Render a `Document` as markdown text.
///
/// Rendering never mutates the document; calling it twice yields identical
/// output.
pub fn to_markdown(doc: &Document, config: &RenderConfig) -> String {
    let lines = document_lines(doc, config);
    tracing::debug!(blocks = doc.blocks.len(), units = lines.len(), "Rendered document");
    lines.join(config.eol())
}

/// Output units of every top-level block, in order.
pub fn document_lines(doc: &Document, config: &RenderConfig) -> Vec<String> {
    doc.blocks
        .iter()
        .flat_map(|block| render_block(block, 0, config))
        .collect()
}

fn render_block(block: &Block, depth: usize, config: &RenderConfig) -> Vec<String> {
    match block {
        Block::Heading { level, text } => {
            let hashes = "#".repeat(level.as_usize());
            if text.is_empty() {
                vec![hashes]
            } else {
                vec![format!("{hashes} {text}")]
            }
        }

        Block::Paragraph { text } => vec![text.clone()],

        Block::Blockquote { children } => render_blockquote(children, config),

        Block::List(list) => render_list(list, depth, config),

        Block::ThematicBreak => vec!["---".to_string()],

        Block::Literal { text } => vec![text.clone()],

        Block::CodeBlock { language, body } => {
            let eol = config.eol();
            vec![format!("```{language}{eol}{body}{eol}```")]
        }

        Block::Table(table) => render_table(table, config).into_iter().collect(),
    }
}

fn render_blockquote(children: &[Block], config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for child in children {
        let units = render_block(child, 0, config);
        if units.is_empty() {
            lines.push(">".to_string());
            continue;
        }
        for unit in &units {
            if unit.is_empty() {
                lines.push(">".to_string());
                continue;
            }
            // Multi-line units (tables, code) need the marker on every line,
            // whichever terminator their text carries.
            for line in unit.lines() {
                if line.is_empty() {
                    lines.push(">".to_string());
                } else {
                    lines.push(format!("> {line}"));
                }
            }
        }
    }
    lines
}

fn render_list(list: &List, depth: usize, config: &RenderConfig) -> Vec<String> {
    let indent = list_indent(depth);
    let mut markers = ListMarkers::new(list.ordered, list.start);
    let mut lines = Vec::new();

    for (item, marker) in list.items.iter().zip(&mut markers) {
        let primary = item
            .fragments
            .iter()
            .map(|fragment| fragment.text())
            .collect::<Vec<_>>()
            .join(config.eol());
        lines.push(format!("{indent}{marker} {primary}"));

        if let Some(nested) = &item.nested {
            lines.extend(render_list(nested, depth + 1, config));
        }
    }
    lines
}

/// The whole table as one unit, every row terminated.
///
/// Tables without a header render nothing, even when rows are present.
fn render_table(table: &Table, config: &RenderConfig) -> Option<String> {
    if table.header.is_empty() {
        return None;
    }
    let eol = config.eol();
    let layout = TableLayout::compute(&table.header, &table.rows, &table.alignment);

    let mut out = String::new();
    out.push_str(&layout.row(&table.header));
    out.push_str(eol);
    out.push_str(&layout.separator());
    out.push_str(eol);
    for row in &table.rows {
        out.push_str(&layout.row(row));
        out.push_str(eol);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineEnding;
    use crate::types::*;
    use pretty_assertions::assert_eq;

    fn doc_with(blocks: Vec<Block>) -> Document {
        Document { blocks }
    }

    fn render(blocks: Vec<Block>) -> String {
        to_markdown(&doc_with(blocks), &RenderConfig::default())
    }

    #[test]
    fn md_heading() {
        let md = render(vec![Block::Heading {
            level: HeadingLevel::H2,
            text: "Overview".into(),
        }]);
        assert_eq!(md, "## Overview");
    }

    #[test]
    fn md_heading_without_text() {
        let md = render(vec![Block::Heading {
            level: HeadingLevel::H4,
            text: String::new(),
        }]);
        assert_eq!(md, "####");
    }

    #[test]
    fn md_paragraphs_join_with_line_feed() {
        let md = render(vec![Block::paragraph("one"), Block::paragraph("two")]);
        assert_eq!(md, "one\ntwo");
    }

    #[test]
    fn md_thematic_break_and_literal() {
        let md = render(vec![Block::ThematicBreak, Block::literal("  raw  ")]);
        assert_eq!(md, "---\n  raw  ");
    }

    #[test]
    fn md_code_block() {
        let md = render(vec![Block::CodeBlock {
            language: "rust".into(),
            body: "fn main() {}".into(),
        }]);
        assert_eq!(md, "```rust\nfn main() {}\n```");
    }

    #[test]
    fn md_code_block_without_language() {
        let md = render(vec![Block::CodeBlock {
            language: String::new(),
            body: "plain".into(),
        }]);
        assert_eq!(md, "```\nplain\n```");
    }

    #[test]
    fn md_blockquote_prefixes_every_line() {
        let md = render(vec![Block::Blockquote {
            children: vec![Block::paragraph("line1"), Block::paragraph("line2")],
        }]);
        assert_eq!(md, "> line1\n> line2");
    }

    #[test]
    fn md_blockquote_keeps_empty_lines() {
        let md = render(vec![Block::Blockquote {
            children: vec![
                Block::paragraph("a"),
                Block::paragraph(""),
                Block::Table(Table::default()),
                Block::paragraph("b"),
            ],
        }]);
        assert_eq!(md, "> a\n>\n>\n> b");
    }

    #[test]
    fn md_blockquote_splits_code_block() {
        let md = render(vec![Block::Blockquote {
            children: vec![Block::CodeBlock {
                language: "sh".into(),
                body: "ls".into(),
            }],
        }]);
        assert_eq!(md, "> ```sh\n> ls\n> ```");
    }

    #[test]
    fn md_crlf_blockquote_prefixes_bare_line_feeds() {
        let doc = doc_with(vec![Block::Blockquote {
            children: vec![
                Block::CodeBlock {
                    language: String::new(),
                    body: "l1\nl2".into(),
                },
                Block::Table(Table::new(["h"]).row(["v"])),
            ],
        }]);
        let md = to_markdown(&doc, &RenderConfig::with_line_ending(LineEnding::CrLf));
        assert_eq!(
            md,
            "> ```\r\n> l1\r\n> l2\r\n> ```\r\n> | h |\r\n> | --- |\r\n> | v |"
        );
    }

    #[test]
    fn md_nested_blockquote() {
        let md = render(vec![Block::Blockquote {
            children: vec![Block::Blockquote {
                children: vec![Block::paragraph("deep")],
            }],
        }]);
        assert_eq!(md, "> > deep");
    }

    #[test]
    fn md_ordered_list() {
        let md = render(vec![Block::List(List::ordered(["First", "Second", "Third"]))]);
        assert_eq!(md, "1. First\n2. Second\n3. Third");
    }

    #[test]
    fn md_bullet_list_ignores_start() {
        let md = render(vec![Block::List(List::bullet(["a", "b"]).starting_at(9))]);
        assert_eq!(md, "- a\n- b");
    }

    #[test]
    fn md_ordered_list_start_at_max_wraps() {
        let md = render(vec![Block::List(List::ordered(["a", "b"]).starting_at(u64::MAX))]);
        assert_eq!(md, "18446744073709551615. a\n0. b");
    }

    #[test]
    fn md_ordered_list_custom_start() {
        let md = render(vec![Block::List(List::ordered(["x", "y"]).starting_at(4))]);
        assert_eq!(md, "4. x\n5. y");
    }

    #[test]
    fn md_nested_bullets_inside_ordered_item() {
        let list = List::ordered(Vec::<String>::new())
            .push(ListItem::new("Install").with_nested(List::bullet(["cargo", "rustup"])))
            .push(ListItem::new("Build"));
        let md = render(vec![Block::List(list)]);
        assert_eq!(md, "1. Install\n  - cargo\n  - rustup\n2. Build");
    }

    #[test]
    fn md_nested_list_has_own_counter() {
        let list = List::ordered(Vec::<String>::new())
            .push(ListItem::new("a").with_nested(List::ordered(["a1", "a2"])))
            .push(ListItem::new("b").with_nested(
                List::ordered(["b1"]).push(
                    ListItem::new("b2").with_nested(List::bullet(["deep"])),
                ),
            ));
        let md = render(vec![Block::List(list)]);
        assert_eq!(
            md,
            "1. a\n  1. a1\n  2. a2\n2. b\n  1. b1\n  2. b2\n    - deep"
        );
    }

    #[test]
    fn md_list_item_fragments_share_marker() {
        let item = ListItem::new("first").with_fragment(Fragment::Literal("second".into()));
        let md = render(vec![Block::List(
            List::bullet(Vec::<String>::new()).push(item),
        )]);
        assert_eq!(md, "- first\nsecond");
    }

    #[test]
    fn md_list_item_without_fragments() {
        let md = render(vec![Block::List(
            List::bullet(Vec::<String>::new()).push(ListItem::default()),
        )]);
        assert_eq!(md, "- ");
    }

    #[test]
    fn md_table_scenario() {
        let md = render(vec![Block::Table(
            Table::new(["Name", "Age"]).row(["Alice", "24"]),
        )]);
        assert_eq!(
            md,
            "| Name  | Age |\n| ----- | --- |\n| Alice | 24  |\n"
        );
    }

    #[test]
    fn md_table_alignment_markers() {
        let md = render(vec![Block::Table(
            Table::new(["Left", "Center", "Right"])
                .row(["L", "C", "R"])
                .align([Alignment::Left, Alignment::Center, Alignment::Right]),
        )]);
        assert_eq!(
            md,
            "| Left | Center | Right |\n\
             | :--- | :----: | ----: |\n\
             | L    |   C    |     R |\n"
        );
    }

    #[test]
    fn md_table_short_alignment_padded_with_default() {
        let md = render(vec![Block::Table(
            Table::new(["a", "b", "c"]).align([Alignment::Right]),
        )]);
        assert_eq!(md, "| a | b | c |\n| --: | --- | --- |\n");
    }

    #[test]
    fn md_table_without_rows() {
        let md = render(vec![Block::Table(Table::new(["Only"]))]);
        assert_eq!(md, "| Only |\n| ---- |\n");
    }

    #[test]
    fn md_table_without_header_renders_nothing() {
        let table = Table {
            header: Vec::new(),
            rows: vec![vec!["orphan".into()]],
            alignment: Vec::new(),
        };
        let md = render(vec![Block::paragraph("before"), Block::Table(table)]);
        assert_eq!(md, "before");
    }

    #[test]
    fn md_table_unicode_width() {
        let md = render(vec![Block::Table(
            Table::new(["City"]).row(["Zürich"]).row(["東京"]),
        )]);
        assert_eq!(
            md,
            "| City   |\n| ------ |\n| Zürich |\n| 東京     |\n"
        );
    }

    #[test]
    fn md_crlf_line_endings() {
        let doc = doc_with(vec![
            Block::Heading {
                level: HeadingLevel::H1,
                text: "T".into(),
            },
            Block::CodeBlock {
                language: String::new(),
                body: "x".into(),
            },
            Block::Table(Table::new(["a"]).row(["b"])),
        ]);
        let md = to_markdown(&doc, &RenderConfig::with_line_ending(LineEnding::CrLf));
        assert_eq!(
            md,
            "# T\r\n```\r\nx\r\n```\r\n| a |\r\n| --- |\r\n| b |\r\n"
        );
    }

    #[test]
    fn md_render_is_idempotent() {
        let doc = doc_with(vec![
            Block::paragraph("p"),
            Block::List(List::ordered(["a", "b"])),
            Block::Table(Table::new(["h"]).row(["r"])),
        ]);
        let config = RenderConfig::default();
        assert_eq!(to_markdown(&doc, &config), to_markdown(&doc, &config));
    }

    #[test]
    fn md_empty_document() {
        assert_eq!(render(Vec::new()), "");
    }
}
