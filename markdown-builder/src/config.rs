use serde::{Deserialize, Serialize};

/// Line terminator placed between rendered lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options that affect rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub line_ending: LineEnding,
}

impl RenderConfig {
    pub fn with_line_ending(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    pub(crate) fn eol(&self) -> &'static str {
        self.line_ending.as_str()
    }
}
