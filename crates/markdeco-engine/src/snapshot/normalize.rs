use std::fmt::Write;

use crate::parsing::{NodeAttrs, ParseResult};

/// Renders `result` one span per line: nodes in order with their marks
/// indented below, then decorations.
pub fn normalize(result: &ParseResult) -> String {
    let mut out = String::from("nodes:\n");
    for node in &result.nodes {
        let kind = serde_name(&node.kind);
        let _ = write!(out, "  {kind} {}..{}", node.from, node.to);
        if let Some(attrs) = &node.attrs {
            out.push(' ');
            out.push_str(&attrs_text(attrs));
        }
        out.push('\n');
        for mark in &node.marks {
            let kind = serde_name(&mark.kind);
            let _ = writeln!(out, "    {kind} {}..{}", mark.from, mark.to);
        }
    }
    out.push_str("decorations:\n");
    for decoration in &result.decorations {
        let _ = writeln!(out, "  {}..{}", decoration.from, decoration.to);
    }
    out
}

fn attrs_text(attrs: &NodeAttrs) -> String {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map_or_else(|| "null".to_string(), |v| v.to_string())
    }
    match attrs {
        NodeAttrs::Heading { level } => format!("level={level}"),
        NodeAttrs::List {
            ordered,
            spread,
            start,
        } => format!("ordered={ordered} spread={spread} start={}", opt(*start)),
        NodeAttrs::ListItem { checked, spread } => {
            format!("checked={} spread={spread}", opt(*checked))
        }
    }
}

/// The serialized (camelCase) name of a unit enum variant.
fn serde_name<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => String::from("?"),
    }
}
