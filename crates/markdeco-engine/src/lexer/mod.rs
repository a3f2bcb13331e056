//! # Tokenizer
//!
//! Builds the token tree the parser consumes from markdown text, using
//! `pulldown-cmark`'s offset iterator.
//!
//! Every token's `raw` is an exact slice of the text it was lexed from.
//! Containers (blockquotes, list items) carry `text`: their raw text with
//! their own per-line markup stripped. Their children come from lexing that
//! text again, so a child's raw is a slice of its parent's `text`:
//!
//! ```text
//! "> * foo"   blockquote  text "* foo"
//!   "* foo"     list
//!   "* foo"       list_item  text "foo"
//!   "foo"           paragraph
//! ```
//!
//! Constructs the parser does not map (code blocks, rules, HTML, tables,
//! links, images) become [`TokenKind::Unknown`] tokens with their raw text.

mod inline;

use std::ops::Range;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

use crate::options::ParseOptions;
use crate::parsing::blocks::kinds::{BlockQuote, Heading, ListMarker};
use crate::tokens::{Token, TokenKind};

type Spanned<'a> = (Event<'a>, Range<usize>);

/// Lexes `source` into top-level block tokens.
pub fn lex(source: &str, options: &ParseOptions) -> Vec<Token> {
    let events: Vec<Spanned> = Parser::new_ext(source, options.markdown_options())
        .into_offset_iter()
        .collect();
    Lexer { source, options }.blocks(&events)
}

struct Lexer<'s> {
    source: &'s str,
    options: &'s ParseOptions,
}

impl Lexer<'_> {
    fn blocks(&self, events: &[Spanned]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < events.len() {
            let (event, range) = &events[i];
            if let Event::Start(tag) = event {
                let end = matching_end(events, i);
                let inner = events.get(i + 1..end).unwrap_or(&[]);
                tokens.push(self.block(tag, range, inner));
                i = end + 1;
            } else {
                tokens.push(Token::new(TokenKind::Unknown, self.slice(self.block_range(range))));
                i += 1;
            }
        }
        tokens
    }

    fn block(&self, tag: &Tag, range: &Range<usize>, inner: &[Spanned]) -> Token {
        let raw_range = self.block_range(range);
        let raw = self.slice(raw_range.clone());
        match tag {
            Tag::Paragraph => {
                Token::paragraph(raw).with_tokens(inline::tokens(self.source, raw_range, inner))
            }
            Tag::Heading { level, .. } => self.heading(*level, raw_range, inner),
            Tag::BlockQuote(_) => {
                let text = BlockQuote::strip_lines(raw);
                Token::new(TokenKind::Blockquote, raw)
                    .with_tokens(lex(&text, self.options))
                    .with_text(text)
            }
            Tag::List(start) => self.list(*start, raw, inner),
            _ => Token::new(TokenKind::Unknown, raw),
        }
    }

    fn heading(&self, level: HeadingLevel, range: Range<usize>, inner: &[Spanned]) -> Token {
        let raw = self.slice(range.clone());
        let content_start = range.start + Heading::prefix_len(raw);
        let content_end = inner
            .iter()
            .map(|(_, r)| r.end)
            .max()
            .unwrap_or(content_start)
            .clamp(content_start, range.end.max(content_start));
        let content = content_start..content_end;
        Token {
            depth: Some(heading_depth(level)),
            text: Some(self.slice(content.clone()).trim_start().to_string()),
            tokens: inline::tokens(self.source, content, inner),
            ..Token::new(TokenKind::Heading, raw)
        }
    }

    fn list(&self, start: Option<u64>, raw: &str, inner: &[Spanned]) -> Token {
        let mut items = Vec::new();
        let mut i = 0;
        while i < inner.len() {
            match &inner[i] {
                (Event::Start(Tag::Item), range) => {
                    let end = matching_end(inner, i);
                    items.push(self.item(range, inner.get(i + 1..end).unwrap_or(&[])));
                    i = end + 1;
                }
                _ => i += 1,
            }
        }
        let loose = items.iter().any(|item| item.loose == Some(true));
        Token {
            ordered: Some(start.is_some()),
            start,
            loose: Some(loose),
            items,
            ..Token::new(TokenKind::List, raw)
        }
    }

    fn item(&self, range: &Range<usize>, inner: &[Spanned]) -> Token {
        let raw = self.slice(self.block_range(range));

        // Loose items wrap their content in paragraphs; the task marker sits
        // directly in the item or in its first paragraph.
        let mut depth = 0usize;
        let mut checked = None;
        let mut loose = false;
        for (event, _) in inner {
            match event {
                Event::Start(tag) => {
                    if depth == 0 && matches!(tag, Tag::Paragraph) {
                        loose = true;
                    }
                    depth += 1;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::TaskListMarker(done) if depth <= 1 && checked.is_none() => {
                    checked = Some(*done);
                }
                _ => {}
            }
        }

        let task = checked.is_some();
        let text = ListMarker::strip_item(raw, task);
        Token {
            task: Some(task),
            checked,
            loose: Some(loose),
            tokens: lex(&text, self.options),
            text: Some(text),
            ..Token::new(TokenKind::ListItem, raw)
        }
    }

    /// Extends a block's range back over leading indentation and drops its
    /// trailing line breaks.
    fn block_range(&self, range: &Range<usize>) -> Range<usize> {
        let before = self.source.get(..range.start).unwrap_or_default();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let start = if before[line_start..].trim_matches([' ', '\t']).is_empty() {
            line_start
        } else {
            range.start
        };
        let body = self.source.get(start..range.end).unwrap_or_default();
        start..start + body.trim_end_matches(['\n', '\r']).len()
    }

    fn slice(&self, range: Range<usize>) -> &str {
        self.source.get(range).unwrap_or_default()
    }
}

/// Index of the `End` event closing the `Start` event at `start`.
fn matching_end(events: &[Spanned], start: usize) -> usize {
    let mut depth = 0usize;
    for (i, (event, _)) in events.iter().enumerate().skip(start) {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    events.len().saturating_sub(1).max(start)
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
