use serde::{Deserialize, Serialize};

/// Block node types a document schema knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Paragraph,
    Heading,
    Blockquote,
    List,
    ListItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkKind {
    Strong,
    Emphasis,
    Delete,
    InlineCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecorationKind {
    #[default]
    Syntax,
}

/// Inline formatting over `from..to`, markers included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSpan {
    pub from: usize,
    pub to: usize,
    #[serde(rename = "type")]
    pub kind: MarkKind,
    /// Per-mark attributes for the host schema. None of the current kinds
    /// carry any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<serde_json::Value>,
}

impl MarkSpan {
    pub fn new(from: usize, to: usize, kind: MarkKind) -> Self {
        Self {
            from,
            to,
            kind,
            attrs: None,
        }
    }
}

/// A range of markup characters to render dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSpan {
    pub from: usize,
    pub to: usize,
    #[serde(rename = "type")]
    pub kind: DecorationKind,
}

impl DecorationSpan {
    pub fn syntax(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            kind: DecorationKind::Syntax,
        }
    }
}

/// Per-type node attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeAttrs {
    Heading {
        level: u8,
    },
    List {
        ordered: bool,
        spread: bool,
        start: Option<u64>,
    },
    ListItem {
        checked: Option<bool>,
        spread: bool,
    },
}

/// Advisory description of one block node in document coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub from: usize,
    pub to: usize,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub marks: Vec<MarkSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<NodeAttrs>,
}

/// Everything one parse pass produced.
///
/// `nodes` is in depth-first post-order; `decorations` in the order the
/// scan met them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub nodes: Vec<NodeDescriptor>,
    pub decorations: Vec<DecorationSpan>,
}

impl ParseResult {
    /// All marks of all nodes, in node order.
    pub fn marks(&self) -> impl Iterator<Item = &MarkSpan> {
        self.nodes.iter().flat_map(|n| n.marks.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.decorations.is_empty()
    }
}
