//! Operation scripts: a JSON or YAML list of builder calls.
//!
//! ```yaml
//! operations:
//!   - op: heading
//!     level: 1
//!     text: Report
//!   - op: table
//!     header: [Name, Age]
//!     rows: [[Alice, "24"]]
//! ```

use anyhow::{Context, Result};
use markdown_builder::{
    BadgeColor, CalloutType, CheckBox, HeadingLevel, List, MarkdownBuilder, Table, TableOptions,
};
use serde::Deserialize;
use std::path::Path;

/// A parsed operation script.
#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// One builder call.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Text {
        text: String,
    },
    Literal {
        text: String,
    },
    LineBreak,
    Blockquote {
        text: String,
    },
    BulletList {
        items: Vec<String>,
    },
    OrderedList {
        items: Vec<String>,
    },
    Checkbox {
        items: Vec<CheckBox>,
    },
    /// Arbitrary list, nesting included.
    List(List),
    Code {
        #[serde(default)]
        language: String,
        body: String,
    },
    Rule,
    Table(Table),
    Details {
        summary: String,
        text: String,
    },
    Callout {
        kind: CalloutType,
        text: String,
    },
    Badge {
        text: String,
        color: BadgeColor,
    },
    Toc {
        #[serde(default = "default_toc_depth")]
        depth: HeadingLevel,
    },
}

fn default_toc_depth() -> HeadingLevel {
    HeadingLevel::H6
}

/// Read a script, choosing YAML for `.yaml`/`.yml` and JSON otherwise.
pub fn load_script(path: &Path) -> Result<Script> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let script = if is_yaml(path) {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse YAML script '{}'", path.display()))?
    } else {
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse JSON script '{}'", path.display()))?
    };
    Ok(script)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Whether `path` looks like a script by extension.
pub fn is_script(path: &Path) -> bool {
    is_yaml(path) || path.extension().and_then(|ext| ext.to_str()) == Some("json")
}

impl Script {
    /// Replay every operation against `md`, in order.
    pub fn apply(self, md: &mut MarkdownBuilder, table_options: TableOptions) {
        tracing::info!(operations = self.operations.len(), "Applying script");
        for op in self.operations {
            apply_operation(md, op, table_options);
        }
    }
}

fn apply_operation(md: &mut MarkdownBuilder, op: Operation, table_options: TableOptions) {
    match op {
        Operation::Heading { level, text } => md.heading(level, text),
        Operation::Text { text } => md.plain_text(text),
        Operation::Literal { text } => md.literal(text),
        Operation::LineBreak => md.line_break(),
        Operation::Blockquote { text } => md.blockquote(&text),
        Operation::BulletList { items } => md.bullet_list(items),
        Operation::OrderedList { items } => md.ordered_list(items),
        Operation::Checkbox { items } => md.checkbox(&items),
        Operation::List(list) => md.list(list),
        Operation::Code { language, body } => md.code_block(language, body),
        Operation::Rule => md.horizontal_rule(),
        Operation::Table(table) => md.custom_table(table, table_options),
        Operation::Details { summary, text } => md.details(&summary, &text),
        Operation::Callout { kind, text } => md.callout(kind, text),
        Operation::Badge { text, color } => md.badge(&text, color),
        Operation::Toc { depth } => md.table_of_contents(depth),
    };
}
