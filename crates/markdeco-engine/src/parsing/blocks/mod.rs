//! # Block Resolver
//!
//! Walks block tokens depth-first, wraps every block in one boundary unit
//! on each side, and records node descriptors in post-order.
//!
//! ## Position placement
//!
//! Every raw character of a line lives in the innermost text block that
//! starts on that line: ancestor prefixes (`> `, list markers) are consumed
//! right after that block's own boundary. Line breaks between sibling blocks
//! occupy no positions; the block boundaries stand in for them. Lines no
//! child owns (blank lines inside a container) are consumed by the
//! container between its children.
//!
//! ## Decorations
//!
//! Containers decorate their first-line markup with one span once their
//! content is scanned, so the span follows the decorations of their
//! descendants. Continuation markers are decorated where they are consumed.

pub mod kinds;
pub mod prefix;

use std::borrow::Cow;
use std::ops::Range;

use log::debug;

use crate::options::PositionUnit;
use crate::parsing::cursor::Cursor;
use crate::parsing::inline::InlineResolver;
use crate::parsing::output::{DecorationSpan, NodeAttrs, NodeDescriptor, NodeKind, ParseResult};
use crate::tokens::{Token, TokenKind};

use kinds::{BlockQuote, Heading, ListMarker};
use prefix::{LinePrefix, line_count, locate, nest, own_widths, width_at};

/// Accumulates one parse pass.
pub struct Resolver {
    cursor: Cursor,
    unit: PositionUnit,
    nodes: Vec<NodeDescriptor>,
    decorations: Vec<DecorationSpan>,
}

impl Resolver {
    pub fn new(base: usize, unit: PositionUnit) -> Self {
        Self {
            cursor: Cursor::new(base).with_unit(unit),
            unit,
            nodes: Vec::new(),
            decorations: Vec::new(),
        }
    }

    /// Resolves top-level block tokens.
    pub fn resolve(&mut self, tokens: &[Token]) {
        for token in tokens {
            self.block(token, &[]);
        }
    }

    pub fn finish(self) -> ParseResult {
        ParseResult {
            nodes: self.nodes,
            decorations: self.decorations,
        }
    }

    /// Resolves one block whose first line is `prefixes[0]`.
    ///
    /// Returns the position where the block's first line starts consuming
    /// its prefix, or `None` when the block occupies no positions.
    fn block(&mut self, token: &Token, prefixes: &[LinePrefix]) -> Option<usize> {
        match token.kind {
            TokenKind::Paragraph | TokenKind::Text => self.paragraph(token, prefixes),
            TokenKind::Heading => self.heading(token, prefixes),
            TokenKind::Blockquote => {
                let text = match &token.text {
                    Some(text) => Cow::Borrowed(text.as_str()),
                    None => Cow::Owned(BlockQuote::strip_lines(token.trimmed_raw())),
                };
                self.container(token, &text, NodeKind::Blockquote, None, prefixes)
            }
            TokenKind::ListItem => {
                let task = token.task == Some(true);
                let text = match &token.text {
                    Some(text) => Cow::Borrowed(text.as_str()),
                    None => Cow::Owned(ListMarker::strip_item(token.trimmed_raw(), task)),
                };
                let attrs = NodeAttrs::ListItem {
                    checked: task.then(|| token.checked.unwrap_or(false)),
                    spread: token.loose.unwrap_or(false),
                };
                self.container(token, &text, NodeKind::ListItem, Some(attrs), prefixes)
            }
            TokenKind::List => self.list(token, prefixes),
            TokenKind::Space => None,
            _ => self.skip(token, prefixes),
        }
    }

    fn occupies_nothing(token: &Token, prefixes: &[LinePrefix]) -> bool {
        token.trimmed_raw().is_empty() && width_at(prefixes, 0) == 0
    }

    fn paragraph(&mut self, token: &Token, prefixes: &[LinePrefix]) -> Option<usize> {
        if Self::occupies_nothing(token, prefixes) {
            return None;
        }
        let from = self.cursor.mark();
        self.cursor.enter_block();
        let start = self.cursor.mark();

        let mut inline = InlineResolver::new(&mut self.cursor, &mut self.decorations, prefixes);
        inline.line_prefix();
        let marks = inline.span(token.trimmed_raw(), &token.tokens);

        self.cursor.exit_block();
        self.nodes.push(NodeDescriptor {
            from,
            to: self.cursor.mark(),
            kind: NodeKind::Paragraph,
            marks,
            attrs: None,
        });
        Some(start)
    }

    fn heading(&mut self, token: &Token, prefixes: &[LinePrefix]) -> Option<usize> {
        if Self::occupies_nothing(token, prefixes) {
            return None;
        }
        let raw = token.trimmed_raw();
        let lead = Heading::prefix_len(raw);

        let from = self.cursor.mark();
        self.cursor.enter_block();
        let start = self.cursor.mark();

        let mut inline = InlineResolver::new(&mut self.cursor, &mut self.decorations, prefixes);
        inline.line_prefix();
        inline.advance_text(&raw[..lead]);
        let hashes_end = inline.position();
        // Trailing closing hashes are advanced as text, not decorated.
        let marks = inline.span(&raw[lead..], &token.tokens);

        self.cursor.exit_block();
        if lead > 0 {
            self.decorations.push(DecorationSpan::syntax(from, hashes_end));
        }
        self.nodes.push(NodeDescriptor {
            from,
            to: self.cursor.mark(),
            kind: NodeKind::Heading,
            marks,
            attrs: Some(NodeAttrs::Heading {
                level: Heading::level(raw, token.depth),
            }),
        });
        Some(start)
    }

    /// Blockquote or list item: strips its own markup, resolves children
    /// against the stripped text, decorates the first-line markup.
    fn container(
        &mut self,
        token: &Token,
        text: &str,
        kind: NodeKind,
        attrs: Option<NodeAttrs>,
        prefixes: &[LinePrefix],
    ) -> Option<usize> {
        let raw = token.trimmed_raw();
        let own = own_widths(raw, text, self.unit);
        let inner = nest(prefixes, &own, kind == NodeKind::ListItem);

        let implicit;
        let mut children: Vec<&Token> = token
            .tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Space)
            .collect();
        if children.is_empty() {
            implicit = Token::paragraph(text);
            children.push(&implicit);
        }

        let from = self.cursor.mark();
        self.cursor.enter_block();
        let entered = self.cursor.mark();
        let start = self.children(&children, text, &inner);
        self.cursor.exit_block();

        let opens_with_markup = own.first().is_some_and(|w| *w > 0);
        if let (true, Some(start), Some(first)) = (opens_with_markup, start, inner.first()) {
            self.decorations
                .push(DecorationSpan::syntax(entered, start + first.width()));
        }
        self.nodes.push(NodeDescriptor {
            from,
            to: self.cursor.mark(),
            kind,
            marks: Vec::new(),
            attrs,
        });
        start
    }

    fn list(&mut self, token: &Token, prefixes: &[LinePrefix]) -> Option<usize> {
        let items: Vec<&Token> = token
            .items
            .iter()
            .filter(|t| t.kind != TokenKind::Space)
            .collect();
        let Some(first) = items.first() else {
            return self.skip(token, prefixes);
        };

        let ordered = token.ordered.unwrap_or(false);
        let attrs = NodeAttrs::List {
            ordered,
            spread: token.loose.unwrap_or(false),
            start: ordered.then(|| {
                ListMarker::ordinal(first.trimmed_raw())
                    .or(token.start)
                    .unwrap_or(1)
            }),
        };

        let from = self.cursor.mark();
        self.cursor.enter_block();
        let start = self.children(&items, token.trimmed_raw(), prefixes);
        self.cursor.exit_block();

        self.nodes.push(NodeDescriptor {
            from,
            to: self.cursor.mark(),
            kind: NodeKind::List,
            marks: Vec::new(),
            attrs: Some(attrs),
        });
        start
    }

    /// Resolves `children` laid out over `text`, consuming the lines none of
    /// them owns. Returns where line 0 started consuming.
    fn children(&mut self, children: &[&Token], text: &str, inner: &[LinePrefix]) -> Option<usize> {
        let text_lines: Vec<&str> = text.split('\n').collect();
        let lines = locate(text, children);

        let mut start = None;
        let mut next_line = 0usize;
        for (child, line) in children.iter().zip(lines) {
            if line < next_line {
                debug!("Overlapping {:?} token on line {line}", child.kind);
            }
            let uncovered = self.uncovered(inner, &text_lines, next_line..line);
            start = start.or(uncovered);
            let consumed = self.block(child, inner.get(line..).unwrap_or(&[]));
            if line == 0 {
                start = start.or(consumed);
            }
            next_line = next_line.max(line + line_count(child.trimmed_raw()));
        }
        let uncovered = self.uncovered(inner, &text_lines, next_line..text_lines.len());
        start.or(uncovered)
    }

    /// Consumes lines of a container that no child owns. Returns where the
    /// range started consuming if it includes line 0.
    fn uncovered(
        &mut self,
        inner: &[LinePrefix],
        text_lines: &[&str],
        lines: Range<usize>,
    ) -> Option<usize> {
        let mut start = None;
        for line in lines {
            if line == 0 {
                start = Some(self.cursor.mark());
            }
            let prefixes = inner.get(line..).unwrap_or(&[]);
            let mut inline = InlineResolver::new(&mut self.cursor, &mut self.decorations, prefixes);
            inline.line_prefix();
            inline.advance_text(text_lines.get(line).copied().unwrap_or_default());
        }
        start
    }

    /// Unsupported block: advances over its raw text and line prefixes.
    fn skip(&mut self, token: &Token, prefixes: &[LinePrefix]) -> Option<usize> {
        if Self::occupies_nothing(token, prefixes) {
            return None;
        }
        debug!("Skipping unsupported {:?} block {:?}", token.kind, token.raw);
        let start = self.cursor.mark();
        let mut inline = InlineResolver::new(&mut self.cursor, &mut self.decorations, prefixes);
        inline.line_prefix();
        inline.advance_text(token.trimmed_raw());
        Some(start)
    }
}
