//! Inline tokens from the events of one text block.
//!
//! Tokens tile their region exactly: source text the event stream skips
//! (escape backslashes, continuation indentation) becomes `text`, and
//! adjacent text merges.

use std::ops::Range;

use log::debug;
use pulldown_cmark::{Event, Tag};

use super::Spanned;
use crate::parsing::inline::Delimiter;
use crate::tokens::{Token, TokenKind};

struct Frame {
    kind: TokenKind,
    range: Range<usize>,
    children: Vec<(Range<usize>, Token)>,
}

impl Frame {
    fn open(tag: &Tag, range: Range<usize>) -> Self {
        let kind = match tag {
            Tag::Strong => TokenKind::Strong,
            Tag::Emphasis => TokenKind::Em,
            Tag::Strikethrough => TokenKind::Del,
            _ => TokenKind::Unknown,
        };
        Self {
            kind,
            range,
            children: Vec::new(),
        }
    }

    /// Unknown frames drop their children: the parser skips them whole.
    fn close(self, source: &str) -> (Range<usize>, Token) {
        let raw = source.get(self.range.clone()).unwrap_or_default();
        let token = if self.kind == TokenKind::Unknown {
            Token::new(TokenKind::Unknown, raw)
        } else {
            let width = Delimiter::width(self.kind, raw);
            let inner = self.range.start + width..self.range.end - width;
            Token::new(self.kind, raw).with_tokens(tile(source, inner, self.children))
        };
        (self.range, token)
    }
}

/// Builds the inline tokens covering `region`.
pub(super) fn tokens(source: &str, region: Range<usize>, events: &[Spanned]) -> Vec<Token> {
    let mut root: Vec<(Range<usize>, Token)> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for (event, range) in events {
        let raw = source.get(range.clone()).unwrap_or_default();
        let leaf = match event {
            Event::Start(tag) => {
                stack.push(Frame::open(tag, range.clone()));
                continue;
            }
            Event::End(_) => match stack.pop() {
                Some(frame) => frame.close(source),
                None => continue,
            },
            Event::Text(_) | Event::SoftBreak | Event::HardBreak => {
                (range.clone(), Token::text(raw))
            }
            Event::Code(code) => (
                range.clone(),
                Token::new(TokenKind::Codespan, raw).with_text(code.to_string()),
            ),
            _ => (range.clone(), Token::new(TokenKind::Unknown, raw)),
        };
        match stack.last_mut() {
            Some(parent) => parent.children.push(leaf),
            None => root.push(leaf),
        }
    }

    while let Some(frame) = stack.pop() {
        let closed = frame.close(source);
        match stack.last_mut() {
            Some(parent) => parent.children.push(closed),
            None => root.push(closed),
        }
    }

    tile(source, region, root)
}

fn tile(source: &str, region: Range<usize>, children: Vec<(Range<usize>, Token)>) -> Vec<Token> {
    let mut out = Vec::new();
    let mut pos = region.start;
    for (range, token) in children {
        if range.start < pos || range.end > region.end {
            debug!("Dropping inline {:?} outside its region", token.kind);
            continue;
        }
        push_text(&mut out, source.get(pos..range.start).unwrap_or_default());
        if token.kind == TokenKind::Text && token.tokens.is_empty() {
            push_text(&mut out, &token.raw);
        } else {
            out.push(token);
        }
        pos = range.end;
    }
    if pos < region.end {
        push_text(&mut out, source.get(pos..region.end).unwrap_or_default());
    }
    out
}

fn push_text(out: &mut Vec<Token>, text: &str) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.kind == TokenKind::Text && last.tokens.is_empty() => {
            last.raw.push_str(text);
            last.text = Some(last.raw.clone());
        }
        _ => out.push(Token::text(text)),
    }
}
