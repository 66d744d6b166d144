//! GitHub alert callouts (`> [!NOTE]`).

use serde::{Deserialize, Serialize};

use crate::builder::MarkdownBuilder;
use crate::types::Block;

/// Alert kind understood by GitHub-flavored markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutType {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl CalloutType {
    pub fn marker(self) -> &'static str {
        match self {
            CalloutType::Note => "[!NOTE]",
            CalloutType::Tip => "[!TIP]",
            CalloutType::Important => "[!IMPORTANT]",
            CalloutType::Warning => "[!WARNING]",
            CalloutType::Caution => "[!CAUTION]",
        }
    }
}

impl MarkdownBuilder {
    /// Append a blockquote whose first line is the alert marker.
    pub fn callout(&mut self, kind: CalloutType, text: impl Into<String>) -> &mut Self {
        // Trailing double space forces a hard break after the marker.
        let head = Block::paragraph(format!("{}  ", kind.marker()));
        self.append(Block::Blockquote {
            children: vec![head, Block::paragraph(text)],
        })
    }

    pub fn note(&mut self, text: impl Into<String>) -> &mut Self {
        self.callout(CalloutType::Note, text)
    }

    pub fn tip(&mut self, text: impl Into<String>) -> &mut Self {
        self.callout(CalloutType::Tip, text)
    }

    pub fn important(&mut self, text: impl Into<String>) -> &mut Self {
        self.callout(CalloutType::Important, text)
    }

    pub fn warning(&mut self, text: impl Into<String>) -> &mut Self {
        self.callout(CalloutType::Warning, text)
    }

    pub fn caution(&mut self, text: impl Into<String>) -> &mut Self {
        self.callout(CalloutType::Caution, text)
    }
}
