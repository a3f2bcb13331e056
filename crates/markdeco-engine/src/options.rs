use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};

/// How one raw character is counted in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionUnit {
    /// UTF-16 code units, as counted by browser-hosted editors.
    #[default]
    Utf16,
    /// Unicode scalar values.
    Chars,
    /// UTF-8 bytes.
    Bytes,
}

impl PositionUnit {
    /// Returns the length of `s` in this unit.
    #[must_use]
    pub fn measure(self, s: &str) -> usize {
        match self {
            PositionUnit::Utf16 => s.encode_utf16().count(),
            PositionUnit::Chars => s.chars().count(),
            PositionUnit::Bytes => s.len(),
        }
    }
}

/// Options shared by the tokenizer and the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Unit used for every reported position.
    pub unit: PositionUnit,
    /// Recognize `~~strikethrough~~` as a `delete` mark.
    pub strikethrough: bool,
    /// Recognize `- [ ]` / `- [x]` task list items.
    pub task_lists: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            unit: PositionUnit::default(),
            strikethrough: true,
            task_lists: true,
        }
    }
}

impl ParseOptions {
    pub(crate) fn markdown_options(&self) -> Options {
        let mut options = Options::empty();
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}
