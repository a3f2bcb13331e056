//! Highlighting a whole host document, one block at a time.
//!
//! The host hands over the text of every block together with the position
//! of the block itself, just before its opening boundary. Each block is
//! lexed and parsed on its own; results are concatenated in block order.
//! Nothing is carried from one call to the next.

use serde::{Deserialize, Serialize};

use crate::options::ParseOptions;
use crate::parsing::{DecorationSpan, MarkSpan, parse_with};

/// Text of one host block and the position the block starts at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockText {
    pub offset: usize,
    pub text: String,
}

impl BlockText {
    pub fn new(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            text: text.into(),
        }
    }

    /// Splits `source` into one block per line, as a host that keeps every
    /// line in its own paragraph would lay them out.
    ///
    /// Each block occupies its content plus two boundary units.
    pub fn per_line(source: &str, options: &ParseOptions) -> Vec<Self> {
        let mut offset = 0usize;
        source
            .lines()
            .map(|line| {
                let block = Self::new(offset, line);
                offset += options.unit.measure(line) + 2;
                block
            })
            .collect()
    }
}

/// Every decoration and mark of one pass over a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlights {
    pub decorations: Vec<DecorationSpan>,
    pub marks: Vec<MarkSpan>,
}

pub fn highlight(blocks: &[BlockText], options: &ParseOptions) -> Highlights {
    let mut highlights = Highlights::default();
    for block in blocks {
        let result = parse_with(&block.text, block.offset, options);
        highlights.marks.extend(result.marks().cloned());
        highlights.decorations.extend(result.decorations);
    }
    log::debug!(
        "Highlighted {} blocks: {} decorations, {} marks",
        blocks.len(),
        highlights.decorations.len(),
        highlights.marks.len()
    );
    highlights
}
