//! Per-line structural prefixes.
//!
//! Containers strip markup from the start of each of their lines before
//! their children see the text: `> ` for blockquotes, the marker on the
//! first line of a list item and the content indent on the others. Those
//! characters still occupy document positions, so each container hands its
//! children a [`LinePrefix`] per line describing what was stripped. The leaf
//! that owns a line consumes its prefix; lines no child owns are consumed by
//! the container itself.

use log::warn;

use crate::options::PositionUnit;
use crate::tokens::Token;

/// What one container stripped from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    /// Measured width of the stripped text.
    pub width: usize,
    /// Markup worth dimming (`>`, list markers); false for bare indentation.
    pub marker: bool,
    /// Covered by the container's own opening decoration.
    pub claimed: bool,
}

/// Strips of every enclosing container for one line, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinePrefix(Vec<Strip>);

impl LinePrefix {
    pub fn strips(&self) -> &[Strip] {
        &self.0
    }

    pub fn width(&self) -> usize {
        self.0.iter().map(|s| s.width).sum()
    }
}

/// Width of the prefix of `line` within `prefixes`, 0 past the end.
pub fn width_at(prefixes: &[LinePrefix], line: usize) -> usize {
    prefixes.get(line).map_or(0, LinePrefix::width)
}

/// Width a container stripped from each of its raw lines.
///
/// `text` is `raw` with the container's own markup removed, line for line.
pub fn own_widths(raw: &str, text: &str, unit: PositionUnit) -> Vec<usize> {
    let text_lines: Vec<&str> = text.split('\n').collect();
    raw.split('\n')
        .enumerate()
        .map(|(i, line)| {
            let kept = text_lines.get(i).map_or(0, |t| unit.measure(t));
            unit.measure(line).saturating_sub(kept)
        })
        .collect()
}

/// Builds the prefixes a container's children see.
///
/// Line 0 is claimed outright: the container decorates its first-line
/// markup, ancestors' included, in one span. Continuation strips are markers
/// unless `indent_only` says they are plain indentation.
pub fn nest(ancestors: &[LinePrefix], own: &[usize], indent_only: bool) -> Vec<LinePrefix> {
    own.iter()
        .enumerate()
        .map(|(i, &width)| {
            let mut strips = ancestors.get(i).cloned().unwrap_or_default().0;
            if i == 0 {
                for strip in &mut strips {
                    strip.claimed = true;
                }
            }
            strips.push(Strip {
                width,
                marker: i == 0 || !indent_only,
                claimed: i == 0,
            });
            LinePrefix(strips)
        })
        .collect()
}

/// Number of lines `raw` spans.
pub fn line_count(raw: &str) -> usize {
    raw.split('\n').count()
}

/// Finds the line each child starts on within its container's `text`.
///
/// Children are searched in order, each after the end of the previous one.
/// A child whose raw text cannot be found is placed on the line after its
/// predecessor.
pub fn locate(text: &str, children: &[&Token]) -> Vec<usize> {
    let mut search_from = 0usize;
    let mut next_line = 0usize;
    children
        .iter()
        .map(|child| {
            let raw = child.trimmed_raw();
            if raw.is_empty() {
                return next_line;
            }
            let found = text
                .get(search_from..)
                .and_then(|rest| rest.find(raw))
                .map(|at| search_from + at);
            let line = match found {
                Some(at) => {
                    search_from = at + raw.len();
                    text[..at].matches('\n').count()
                }
                None => {
                    warn!("Could not locate {:?} token {raw:?} in its container", child.kind);
                    next_line
                }
            };
            next_line = line + line_count(raw);
            line
        })
        .collect()
}
