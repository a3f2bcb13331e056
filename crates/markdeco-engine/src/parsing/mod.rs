pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod output;

use log::debug;

use crate::error::EngineError;
use crate::lexer::lex;
use crate::options::{ParseOptions, PositionUnit};
use crate::tokens::Token;

use blocks::Resolver;

pub use output::{
    DecorationKind, DecorationSpan, MarkKind, MarkSpan, NodeAttrs, NodeDescriptor, NodeKind,
    ParseResult,
};

/// Maps a token tree onto document coordinates starting at `offset`.
///
/// Every call builds its own accumulator, so a `Parser` can be reused and
/// shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Parser {
    offset: usize,
    unit: PositionUnit,
}

impl Parser {
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            unit: PositionUnit::default(),
        }
    }

    pub fn with_unit(mut self, unit: PositionUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn parse(&self, tokens: &[Token]) -> ParseResult {
        let mut resolver = Resolver::new(self.offset, self.unit);
        resolver.resolve(tokens);
        let result = resolver.finish();
        debug!(
            "Parsed {} tokens at offset {}: {} nodes, {} decorations",
            tokens.len(),
            self.offset,
            result.nodes.len(),
            result.decorations.len()
        );
        result
    }
}

/// Lexes and parses `source` at offset 0 with default options.
pub fn parse(source: &str) -> ParseResult {
    parse_with(source, 0, &ParseOptions::default())
}

/// Lexes and parses `source` at `offset`.
pub fn parse_with(source: &str, offset: usize, options: &ParseOptions) -> ParseResult {
    let tokens = lex(source, options);
    Parser::new(offset).with_unit(options.unit).parse(&tokens)
}

/// Parses an externally produced token tree given as JSON.
///
/// Accepts either an array of block tokens or a single token.
pub fn parse_json(
    json: &str,
    offset: i64,
    options: &ParseOptions,
) -> Result<ParseResult, EngineError> {
    let offset = usize::try_from(offset).map_err(|_| EngineError::NegativeOffset(offset))?;
    let value: serde_json::Value = serde_json::from_str(json)?;
    let tokens: Vec<Token> = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(Parser::new(offset).with_unit(options.unit).parse(&tokens))
}
