//! Token tree consumed by the parser.
//!
//! The shape follows the widely used `marked` lexer output (`type`, `raw`,
//! `text`, `tokens`, `items`, ...) so externally produced token JSON can be
//! fed straight into [`crate::parse_json`]. The crate's own [`crate::lex`]
//! produces the same shape.

use serde::{Deserialize, Deserializer, Serialize};

/// Token type tag.
///
/// Unknown tags deserialize to [`TokenKind::Unknown`]; the parser skips
/// those while keeping positions consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Paragraph,
    Heading,
    Blockquote,
    List,
    #[serde(alias = "listItem")]
    ListItem,
    Text,
    Strong,
    #[serde(alias = "emphasis")]
    Em,
    #[serde(alias = "delete")]
    Del,
    #[serde(alias = "inlineCode")]
    Codespan,
    Space,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TokenKind {
    /// Returns true for kinds that delimit inline formatting.
    pub fn is_delimited(self) -> bool {
        matches!(
            self,
            TokenKind::Strong | TokenKind::Em | TokenKind::Del | TokenKind::Codespan
        )
    }
}

/// One markdown token.
///
/// `raw` is the exact source text the token was lexed from, markup included.
/// Children live in `tokens` (inline content, or child blocks of a container)
/// and, for lists, in `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(default)]
    pub raw: String,
    /// Content with the token's own markup stripped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Heading level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    /// First ordinal of an ordered list. `marked` emits `""` for bullet lists.
    #[serde(
        default,
        deserialize_with = "lenient_start",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loose: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Token>,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// A paragraph with no inline children; the parser treats its raw text
    /// as plain text.
    pub fn paragraph(raw: impl Into<String>) -> Self {
        Self::new(TokenKind::Paragraph, raw)
    }

    pub fn text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            text: Some(raw.clone()),
            ..Self::new(TokenKind::Text, raw)
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Raw text without the trailing line break that lexers leave on blocks.
    pub fn trimmed_raw(&self) -> &str {
        self.raw.trim_end_matches(['\n', '\r'])
    }
}

fn lenient_start<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
