//! `markdown-builder`: build markdown documents programmatically.
//!
//! Append headings, paragraphs, lists, tables, quotes and code blocks to a
//! [`MarkdownBuilder`], then render the tree to text. Tables are laid out with
//! padded, alignment-aware columns; lists nest with independent numbering.
//!
//! # Quick start
//!
//! ```
//! use markdown_builder::{Alignment, MarkdownBuilder, Table};
//!
//! let mut md = MarkdownBuilder::new();
//! md.h2("Users")
//!     .table(Table::new(["Name", "Age"]).row(["Alice", "24"]).align([Alignment::Left]));
//!
//! assert_eq!(
//!     md.to_markdown(),
//!     "## Users\n| Name  | Age |\n| :---- | --- |\n| Alice | 24  |\n"
//! );
//! assert!(md.error().is_none());
//! ```

pub mod badge;
pub mod builder;
pub mod callout;
pub mod config;
pub mod error;
pub mod inline;
pub mod layout;
pub mod render_md;
pub mod toc;
pub mod types;
pub mod validate;

pub use badge::BadgeColor;
pub use builder::MarkdownBuilder;
pub use callout::CalloutType;
pub use config::{LineEnding, RenderConfig};
pub use error::*;
pub use types::*;

impl Document {
    /// Render this document as markdown text.
    pub fn to_markdown(&self, config: &RenderConfig) -> String {
        render_md::to_markdown(self, config)
    }

    /// Validate this document and return any diagnostics.
    pub fn validate(&self) -> Vec<Diagnostic> {
        validate::validate(self)
    }
}
