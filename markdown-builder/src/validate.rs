//! Structural checks for documents that did not come through the builder.
//!
//! A `Document` deserialized from JSON or YAML can hold tables and lists the
//! builder would have refused. Returns a list of `Diagnostic` items (non-fatal).

use crate::error::{Diagnostic, Severity};
use crate::types::{Block, Document, List};

/// Validate a document and return any diagnostics, in document order.
pub fn validate(doc: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for block in &doc.blocks {
        validate_block(block, &mut diagnostics);
    }
    diagnostics
}

fn validate_block(block: &Block, diagnostics: &mut Vec<Diagnostic>) {
    match block {
        Block::Table(table) => {
            if let Err(err) = table.validate_columns() {
                diagnostics.push(Diagnostic::from(&err));
            }
            if table.header.is_empty() && !table.rows.is_empty() {
                diagnostics.push(Diagnostic {
                    severity: Severity::Warning,
                    message: format!(
                        "Table has {} rows but no header; it will not be rendered",
                        table.rows.len()
                    ),
                    code: Some("MD002".into()),
                });
            }
        }

        Block::List(list) => validate_list(list, diagnostics),

        Block::Blockquote { children } => {
            for child in children {
                validate_block(child, diagnostics);
            }
        }

        Block::Heading { .. }
        | Block::Paragraph { .. }
        | Block::ThematicBreak
        | Block::Literal { .. }
        | Block::CodeBlock { .. } => {}
    }
}

fn validate_list(list: &List, diagnostics: &mut Vec<Diagnostic>) {
    if list.items.is_empty() {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message: "List has no items".into(),
            code: Some("MD003".into()),
        });
    }
    for item in &list.items {
        if let Some(nested) = &item.nested {
            validate_list(nested, diagnostics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListItem, Table};

    #[test]
    fn clean_document_has_no_diagnostics() {
        let doc = Document {
            blocks: vec![
                Block::paragraph("x"),
                Block::Table(Table::new(["a"]).row(["1"])),
                Block::List(List::bullet(["a"])),
            ],
        };
        assert!(validate(&doc).is_empty());
    }

    #[test]
    fn ragged_table_is_an_error() {
        let doc = Document {
            blocks: vec![Block::Table(Table::new(["a", "b"]).row(["1"]))],
        };
        let diags = validate(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].code.as_deref(), Some("MD001"));
    }

    #[test]
    fn headerless_table_warns() {
        let table = Table {
            header: Vec::new(),
            rows: vec![Vec::new()],
            alignment: Vec::new(),
        };
        let diags = validate(&Document {
            blocks: vec![Block::Table(table)],
        });
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.as_deref(), Some("MD002"));
    }

    #[test]
    fn empty_nested_list_inside_quote_warns() {
        let list = List::bullet(Vec::<String>::new())
            .push(ListItem::new("a").with_nested(List::ordered(Vec::<String>::new())));
        let doc = Document {
            blocks: vec![Block::Blockquote {
                children: vec![Block::List(list)],
            }],
        };
        let diags = validate(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.as_deref(), Some("MD003"));
    }
}
