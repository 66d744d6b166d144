//! shields.io badges.

use serde::{Deserialize, Serialize};

use crate::builder::MarkdownBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl BadgeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeColor::Red => "red",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Green => "green",
            BadgeColor::Blue => "blue",
        }
    }
}

/// Image markdown for a static badge. `text` is used as-is in the URL path.
pub fn badge(text: &str, color: BadgeColor) -> String {
    format!(
        "![Badge](https://img.shields.io/badge/{text}-{})",
        color.as_str()
    )
}

impl MarkdownBuilder {
    /// Append a paragraph holding a single badge.
    pub fn badge(&mut self, text: &str, color: BadgeColor) -> &mut Self {
        self.plain_text(badge(text, color))
    }

    pub fn red_badge(&mut self, text: &str) -> &mut Self {
        self.badge(text, BadgeColor::Red)
    }

    pub fn yellow_badge(&mut self, text: &str) -> &mut Self {
        self.badge(text, BadgeColor::Yellow)
    }

    pub fn green_badge(&mut self, text: &str) -> &mut Self {
        self.badge(text, BadgeColor::Green)
    }

    pub fn blue_badge(&mut self, text: &str) -> &mut Self {
        self.badge(text, BadgeColor::Blue)
    }
}
