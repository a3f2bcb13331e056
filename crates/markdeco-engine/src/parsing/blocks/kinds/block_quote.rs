/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in the
/// lexer and resolver.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the byte length of one quote marker at the start of `line`.
    ///
    /// A marker is up to three spaces, `>`, and one optional space or tab.
    /// Lazy continuation lines have no marker and return 0.
    pub fn strip_prefix(line: &str) -> usize {
        let b = line.as_bytes();
        let mut i = 0usize;
        while i < 3 && b.get(i) == Some(&b' ') {
            i += 1;
        }
        if b.get(i) != Some(&(Self::PREFIX as u8)) {
            return 0;
        }
        i += 1;
        if matches!(b.get(i), Some(b' ' | b'\t')) {
            i += 1;
        }
        i
    }

    /// Removes one level of quote markers from every line of `raw`.
    pub fn strip_lines(raw: &str) -> String {
        raw.split('\n')
            .map(|line| &line[Self::strip_prefix(line)..])
            .collect::<Vec<_>>()
            .join("\n")
    }
}
