//! # Inline Resolver
//!
//! Walks the inline tokens of one text block (paragraph or heading) and
//! emits marks plus syntax decorations. Inline content adds no boundary
//! units; every raw character advances the cursor by its measured width.
//!
//! Line breaks inside the block advance one unit and are followed by the
//! structural prefix (quote markers, list indentation) the enclosing
//! containers stripped from the next line.

pub mod kinds;

use log::debug;

pub use kinds::Delimiter;

use crate::parsing::blocks::prefix::LinePrefix;
use crate::parsing::cursor::Cursor;
use crate::parsing::output::{DecorationSpan, MarkSpan};
use crate::tokens::{Token, TokenKind};

pub struct InlineResolver<'a> {
    cursor: &'a mut Cursor,
    decorations: &'a mut Vec<DecorationSpan>,
    prefixes: &'a [LinePrefix],
    line: usize,
}

impl<'a> InlineResolver<'a> {
    pub fn new(
        cursor: &'a mut Cursor,
        decorations: &'a mut Vec<DecorationSpan>,
        prefixes: &'a [LinePrefix],
    ) -> Self {
        Self {
            cursor,
            decorations,
            prefixes,
            line: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.mark()
    }

    /// Consumes the structural prefix of the current line.
    ///
    /// Unclaimed marker strips become syntax decorations; adjacent ones merge.
    pub fn line_prefix(&mut self) {
        let Some(prefix) = self.prefixes.get(self.line) else {
            return;
        };
        let mut run: Option<usize> = None;
        for strip in prefix.strips() {
            if strip.width == 0 {
                continue;
            }
            let decorate = strip.marker && !strip.claimed;
            match (decorate, run) {
                (true, None) => run = Some(self.cursor.mark()),
                (false, Some(from)) => {
                    self.decorations
                        .push(DecorationSpan::syntax(from, self.cursor.mark()));
                    run = None;
                }
                _ => {}
            }
            self.cursor.advance(strip.width);
        }
        if let Some(from) = run {
            self.decorations
                .push(DecorationSpan::syntax(from, self.cursor.mark()));
        }
    }

    /// Advances over plain text, consuming line prefixes after each break.
    pub fn advance_text(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.cursor.consume(first);
        }
        for line in lines {
            self.cursor.advance(1);
            self.line += 1;
            self.line_prefix();
            self.cursor.consume(line);
        }
    }

    /// Resolves `children` laid out over `raw`, returning their marks.
    ///
    /// Text not covered by children is advanced as plain text.
    pub fn span(&mut self, raw: &str, children: &[Token]) -> Vec<MarkSpan> {
        let mut marks = Vec::new();
        let mut consumed = 0usize;
        for child in children {
            marks.extend(self.token(child));
            consumed += child.raw.len();
        }
        if let Some(rest) = raw.get(consumed..) {
            self.advance_text(rest);
        }
        marks
    }

    fn token(&mut self, token: &Token) -> Vec<MarkSpan> {
        match token.kind {
            kind if kind.is_delimited() => self.delimited(token),
            TokenKind::Text if !token.tokens.is_empty() => self.span(&token.raw, &token.tokens),
            TokenKind::Text => {
                self.advance_text(&token.raw);
                Vec::new()
            }
            kind => {
                debug!("Skipping unsupported inline {kind:?} token {:?}", token.raw);
                self.advance_text(&token.raw);
                Vec::new()
            }
        }
    }

    /// Opening marker, inner content, closing marker; the outer mark is
    /// listed before the marks nested in it.
    fn delimited(&mut self, token: &Token) -> Vec<MarkSpan> {
        let raw = token.raw.as_str();
        let width = Delimiter::width(token.kind, raw);
        let (Some(open), Some(inner), Some(close)) = (
            raw.get(..width),
            raw.get(width..raw.len() - width),
            raw.get(raw.len() - width..),
        ) else {
            self.advance_text(raw);
            return Vec::new();
        };

        let from = self.cursor.mark();
        self.marker(open);
        let nested = if token.kind == TokenKind::Codespan {
            self.advance_text(inner);
            Vec::new()
        } else {
            self.span(inner, &token.tokens)
        };
        self.marker(close);

        let Some(kind) = Delimiter::mark(token.kind) else {
            return nested;
        };
        let mut marks = vec![MarkSpan::new(from, self.cursor.mark(), kind)];
        marks.extend(nested);
        marks
    }

    fn marker(&mut self, marker: &str) {
        if marker.is_empty() {
            return;
        }
        let from = self.cursor.mark();
        self.cursor.consume(marker);
        self.decorations
            .push(DecorationSpan::syntax(from, self.cursor.mark()));
    }
}
