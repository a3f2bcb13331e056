use crate::parsing::output::MarkKind;
use crate::tokens::TokenKind;

/// Marker widths of delimited inline kinds.
///
/// Both the lexer (to find where inner content starts) and the inline
/// resolver (to place syntax decorations) read widths from here.
pub struct Delimiter;

impl Delimiter {
    pub const STRONG: usize = 2;
    pub const EMPHASIS: usize = 1;
    /// Strikethrough tilde.
    pub const TILDE: u8 = b'~';
    /// Code span backtick.
    pub const TICK: u8 = b'`';

    /// Mark produced by a delimited token kind.
    pub fn mark(kind: TokenKind) -> Option<MarkKind> {
        match kind {
            TokenKind::Strong => Some(MarkKind::Strong),
            TokenKind::Em => Some(MarkKind::Emphasis),
            TokenKind::Del => Some(MarkKind::Delete),
            TokenKind::Codespan => Some(MarkKind::InlineCode),
            _ => None,
        }
    }

    /// Width one marker should have, judged from the token kind and its raw text.
    pub fn expected(kind: TokenKind, raw: &str) -> usize {
        match kind {
            TokenKind::Strong => Self::STRONG,
            TokenKind::Em => Self::EMPHASIS,
            TokenKind::Del => Self::run(raw, Self::TILDE).clamp(1, 2),
            TokenKind::Codespan => Self::run(raw, Self::TICK).max(1),
            _ => 0,
        }
    }

    /// Width of one marker, clamped so opening and closing never overlap.
    pub fn width(kind: TokenKind, raw: &str) -> usize {
        let expected = Self::expected(kind, raw);
        let available = raw.len() / 2;
        if expected > available {
            log::warn!(
                "Malformed {kind:?} marker in {raw:?}: expected width {expected}, clamped to {available}"
            );
            return available;
        }
        expected
    }

    fn run(raw: &str, byte: u8) -> usize {
        raw.bytes().take_while(|b| *b == byte).count()
    }
}
