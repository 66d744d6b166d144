//! Inline formatting helpers.
//!
//! Each returns decorated markdown text to pass into `plain_text`, a list
//! item, or a table cell. Input is not escaped.

pub fn link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

pub fn image(text: &str, url: &str) -> String {
    format!("![{text}]({url})")
}

pub fn strikethrough(text: &str) -> String {
    format!("~~{text}~~")
}

pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

pub fn italic(text: &str) -> String {
    format!("*{text}*")
}

pub fn bold_italic(text: &str) -> String {
    format!("***{text}***")
}

/// Inline code span.
pub fn code(text: &str) -> String {
    format!("`{text}`")
}

/// `==mark==` highlight (extended syntax).
pub fn highlight(text: &str) -> String {
    format!("=={text}==")
}
