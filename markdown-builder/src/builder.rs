//! Fluent document builder.
//!
//! Every append method returns `&mut Self` so calls chain. Validation
//! failures do not break the chain: the offending block is skipped, the error
//! is remembered, and [`MarkdownBuilder::build`] reports it at the end.

use std::io::Write;

use crate::config::RenderConfig;
use crate::error::{BuildError, ValidationError};
use crate::render_md;
use crate::types::{
    Block, CheckBox, Document, HeadingLevel, HeadingRecord, List, Table, TableOptions,
};

/// Builds a markdown [`Document`] one block at a time.
#[derive(Debug, Clone, Default)]
pub struct MarkdownBuilder {
    doc: Document,
    config: RenderConfig,
    headings: Vec<HeadingRecord>,
    /// Most recent first.
    errors: Vec<ValidationError>,
}

impl MarkdownBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Headings appended so far, in document order.
    pub fn headings(&self) -> &[HeadingRecord] {
        &self.headings
    }

    /// Accumulated validation errors, if any.
    pub fn error(&self) -> Option<BuildError> {
        if self.errors.is_empty() {
            None
        } else {
            Some(BuildError::Validation(self.errors.clone()))
        }
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Render the document. Always succeeds, even with pending errors.
    pub fn to_markdown(&self) -> String {
        render_md::to_markdown(&self.doc, &self.config)
    }

    /// Write the rendered document to `dest` in one write.
    ///
    /// Returns the write failure (with any pending validation errors attached)
    /// or, if the write succeeded, the pending validation errors.
    pub fn build<W: Write>(&self, mut dest: W) -> Result<(), BuildError> {
        let text = self.to_markdown();
        // An empty document still reaches the sink so a closed destination is reported.
        let written = if text.is_empty() {
            dest.write(text.as_bytes()).map(|_| ())
        } else {
            dest.write_all(text.as_bytes())
        };
        if let Err(source) = written.and_then(|()| dest.flush()) {
            return Err(BuildError::Write {
                source,
                pending: self.errors.clone(),
            });
        }
        match self.error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Consume the builder, returning the document or the accumulated error.
    pub fn finish(self) -> Result<Document, BuildError> {
        if self.errors.is_empty() {
            Ok(self.doc)
        } else {
            Err(BuildError::Validation(self.errors))
        }
    }

    pub(crate) fn append(&mut self, block: Block) -> &mut Self {
        self.doc.blocks.push(block);
        self
    }

    fn record_error(&mut self, err: ValidationError) {
        self.errors.insert(0, err);
    }

    // -- Headings and text ---------------------------------------------

    pub fn heading(&mut self, level: HeadingLevel, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.headings.push(HeadingRecord {
            level,
            text: text.clone(),
        });
        self.append(Block::Heading { level, text })
    }

    pub fn h1(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(HeadingLevel::H1, text)
    }

    pub fn h2(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(HeadingLevel::H2, text)
    }

    pub fn h3(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(HeadingLevel::H3, text)
    }

    pub fn h4(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(HeadingLevel::H4, text)
    }

    pub fn h5(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(HeadingLevel::H5, text)
    }

    pub fn h6(&mut self, text: impl Into<String>) -> &mut Self {
        self.heading(HeadingLevel::H6, text)
    }

    /// Append a paragraph of plain text.
    pub fn plain_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(Block::paragraph(text))
    }

    /// Append a line that is emitted verbatim.
    pub fn literal(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(Block::literal(text))
    }

    /// Append a markdown hard line break (two spaces).
    pub fn line_break(&mut self) -> &mut Self {
        self.literal("  ")
    }

    /// Append a quote, one paragraph per input line.
    pub fn blockquote(&mut self, text: &str) -> &mut Self {
        let normalized = text.replace("\r\n", "\n");
        let children = normalized.split('\n').map(Block::paragraph).collect();
        self.append(Block::Blockquote { children })
    }

    /// Append an HTML `<details>` disclosure block.
    pub fn details(&mut self, summary: &str, text: &str) -> &mut Self {
        let eol = self.config.line_ending.as_str();
        self.literal(format!(
            "<details><summary>{summary}</summary>{eol}{text}{eol}</details>"
        ))
    }

    pub fn code_block(&mut self, language: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.append(Block::CodeBlock {
            language: language.into(),
            body: body.into(),
        })
    }

    pub fn horizontal_rule(&mut self) -> &mut Self {
        self.append(Block::ThematicBreak)
    }

    // -- Lists -----------------------------------------------------------

    /// Append a `-` list. Nothing is appended for an empty iterator.
    pub fn bullet_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list(List::bullet(items))
    }

    /// Append a numbered list starting at 1. Nothing is appended for an empty iterator.
    pub fn ordered_list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list(List::ordered(items))
    }

    /// Append a task list with `[x]` / `[ ]` boxes.
    pub fn checkbox(&mut self, set: &[CheckBox]) -> &mut Self {
        self.list(List::bullet(set.iter().map(|entry| {
            let check = if entry.checked { "x" } else { " " };
            format!("[{check}] {}", entry.text)
        })))
    }

    /// Append a list built by the caller, nested lists included.
    pub fn list(&mut self, list: List) -> &mut Self {
        if list.items.is_empty() {
            return self;
        }
        self.append(Block::List(list))
    }

    // -- Tables ----------------------------------------------------------

    /// Append a table after checking that every row matches the header.
    ///
    /// A mismatch is recorded and the table skipped. A table without header
    /// cells is skipped silently.
    pub fn table(&mut self, table: Table) -> &mut Self {
        if let Err(err) = table.validate_columns() {
            tracing::warn!(error = %err, "Skipping table with mismatched columns");
            self.record_error(err);
            return self;
        }
        if table.header.is_empty() {
            tracing::debug!(rows = table.rows.len(), "Skipping table without header");
            return self;
        }
        self.append(Block::Table(table))
    }

    pub fn custom_table(&mut self, mut table: Table, options: TableOptions) -> &mut Self {
        if options.auto_format_headers {
            table.header = table.header.iter().map(|h| title_case(h)).collect();
        }
        self.table(table)
    }
}

/// `"first  NAME"` -> `"First Name"`. Only ASCII initials are capitalized.
fn title_case(header: &str) -> String {
    header
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => std::iter::once(first.to_ascii_uppercase()).chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
