//! # markdeco-engine
//!
//! Maps markdown token trees onto the coordinate space of a structured
//! rich-text document.
//!
//! A live markdown editing surface keeps every markup character (`**`, `#`,
//! `>`, list markers, backticks) as plain editable text. This crate works out,
//! for one block of that document:
//!
//! - which block nodes the text describes ([`NodeDescriptor`], post-order),
//! - which inline formatting applies where ([`MarkSpan`]),
//! - which character ranges are markup that should render dimmed
//!   ([`DecorationSpan`]).
//!
//! Positions are *document* coordinates: every block container occupies one
//! boundary unit before and one after its content, so a paragraph `foo`
//! spans `0..5`, not `0..3`.
//!
//! ## Pipeline
//!
//! ```text
//! text ──lex──▶ Vec<Token> ──Parser::parse──▶ ParseResult { nodes, decorations }
//!  (pulldown-cmark)          (Cursor + block/inline resolvers)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use markdeco_engine::{NodeKind, parse};
//!
//! let result = parse("**foo**");
//! assert_eq!(result.nodes.len(), 1);
//! assert_eq!(result.nodes[0].kind, NodeKind::Paragraph);
//! assert_eq!((result.nodes[0].from, result.nodes[0].to), (0, 9));
//! assert_eq!(result.decorations.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - **`tokens`**: the token tree consumed by the parser
//! - **`lexer`**: builds token trees from markdown text
//! - **`parsing`**: position cursor, block and inline resolvers, [`Parser`]
//! - **`scan`**: highlights every block of a host document
//! - **`snapshot`**: invariant checks and a stable text rendering for tests

pub mod error;
pub mod lexer;
pub mod options;
pub mod parsing;
pub mod scan;
pub mod snapshot;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use error::EngineError;
pub use lexer::lex;
pub use options::{ParseOptions, PositionUnit};
pub use parsing::{
    DecorationKind, DecorationSpan, MarkKind, MarkSpan, NodeAttrs, NodeDescriptor, NodeKind,
    ParseResult, Parser, parse, parse_json, parse_with,
};
pub use scan::{BlockText, Highlights, highlight};
pub use tokens::{Token, TokenKind};
