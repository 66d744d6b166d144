//! Table of contents from recorded headings.

use crate::builder::MarkdownBuilder;
use crate::layout::list_indent;
use crate::types::{Block, HeadingLevel};

/// URL fragment for a heading: lowercase, spaces to `-`, anything outside
/// `[a-z0-9-]` dropped.
pub fn anchor(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

impl MarkdownBuilder {
    /// Append a linked outline of every heading up to `depth`.
    ///
    /// Each entry is indented by its heading level; a blank line closes the
    /// outline. Nothing is appended when no heading has been recorded.
    pub fn table_of_contents(&mut self, depth: HeadingLevel) -> &mut Self {
        if self.headings().is_empty() {
            tracing::debug!("No headings recorded, skipping table of contents");
            return self;
        }

        let entries: Vec<String> = self
            .headings()
            .iter()
            .filter(|heading| heading.level <= depth)
            .map(|heading| {
                format!(
                    "{}- [{}](#{})",
                    list_indent(heading.level.as_usize() - 1),
                    heading.text,
                    anchor(&heading.text)
                )
            })
            .collect();

        for entry in entries {
            self.append(Block::literal(entry));
        }
        self.append(Block::literal(""))
    }
}
