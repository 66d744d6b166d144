use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A markdown document under construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Ordered sequence of top-level blocks.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A structural unit of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// ATX heading.
    Heading { level: HeadingLevel, text: String },
    /// Plain-text paragraph. No inline markup model; the text is emitted as-is.
    Paragraph { text: String },
    /// Quote container with nested blocks.
    Blockquote { children: Vec<Block> },
    /// Ordered or bulleted list.
    List(List),
    /// Horizontal rule.
    ThematicBreak,
    /// Raw text emitted verbatim.
    Literal { text: String },
    /// Fenced code block.
    CodeBlock {
        #[serde(default)]
        language: String,
        body: String,
    },
    /// Pipe table.
    Table(Table),
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Block::Literal { text: text.into() }
    }
}

/// Heading depth, `#` through `######`.
///
/// Serialized as the integer 1–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
    H6 = 6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn as_usize(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            other => Err(format!("heading level must be between 1 and 6, got {other}")),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level as u8
    }
}

/// A list of items, optionally numbered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub ordered: bool,
    /// First number of an ordered list. Ignored for bullet lists.
    #[serde(default = "default_start")]
    pub start: u64,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

fn default_start() -> u64 {
    1
}

impl List {
    /// A `-` bulleted list, one plain item per entry.
    pub fn bullet<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ordered: false,
            start: 1,
            items: items.into_iter().map(ListItem::new).collect(),
        }
    }

    /// A numbered list starting at 1.
    pub fn ordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ordered: true,
            start: 1,
            items: items.into_iter().map(ListItem::new).collect(),
        }
    }

    pub fn starting_at(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    pub fn push(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }
}

/// One entry of a [`List`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Primary content, rendered after the marker and joined by line breaks.
    #[serde(default)]
    pub fragments: Vec<Fragment>,
    /// Sub-list rendered one level deeper, directly after this item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<List>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::Paragraph(text.into())],
            nested: None,
        }
    }

    /// Append another fragment under the same marker.
    pub fn with_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn with_nested(mut self, list: List) -> Self {
        self.nested = Some(list);
        self
    }
}

/// Primary content of a list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    Paragraph(String),
    Literal(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Paragraph(text) | Fragment::Literal(text) => text,
        }
    }
}

/// Column alignment in a pipe table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// No explicit alignment (`---`); cells are padded like left-aligned ones.
    #[default]
    Default,
    Left,
    Center,
    Right,
}

/// Content and layout of a pipe table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
    /// One entry per column. Missing entries fall back to [`Alignment::Default`].
    #[serde(default)]
    pub alignment: Vec<Alignment>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            alignment: Vec::new(),
        }
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn align(mut self, alignment: impl Into<Vec<Alignment>>) -> Self {
        self.alignment = alignment.into();
        self
    }

    /// Check that every row has as many cells as the header.
    ///
    /// Reports the first offending row (0-based).
    pub fn validate_columns(&self) -> Result<(), ValidationError> {
        let expected = self.header.len();
        for (row, record) in self.rows.iter().enumerate() {
            if record.len() != expected {
                return Err(ValidationError::ColumnMismatch {
                    row,
                    expected,
                    found: record.len(),
                });
            }
        }
        Ok(())
    }
}

/// Formatting applied to a table before it is appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    /// Title-case every header cell.
    pub auto_format_headers: bool,
}

/// A single entry of a checkbox list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckBox {
    #[serde(default)]
    pub checked: bool,
    pub text: String,
}

impl CheckBox {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            checked,
            text: text.into(),
        }
    }
}

/// A heading seen while building, kept for table-of-contents generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub level: HeadingLevel,
    pub text: String,
}
