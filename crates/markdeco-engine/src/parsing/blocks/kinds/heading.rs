/// ATX heading type with owned delimiter constant.
pub struct Heading;

impl Heading {
    /// The heading marker byte.
    pub const HASH: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Byte length of the leading indent, the opening `#` run and at most
    /// one space or tab after it. Further whitespace belongs to the content.
    ///
    /// Returns 0 when `raw` does not open with `#` (setext headings).
    pub fn prefix_len(raw: &str) -> usize {
        let b = raw.as_bytes();
        let mut i = 0usize;
        while i < 3 && b.get(i) == Some(&b' ') {
            i += 1;
        }
        let hashes = Self::hash_count(&raw[i..]);
        if hashes == 0 {
            return 0;
        }
        i += hashes;
        if matches!(b.get(i), Some(b' ' | b'\t')) {
            i += 1;
        }
        i
    }

    /// Heading level from the token's depth, else from the `#` run.
    pub fn level(raw: &str, depth: Option<u8>) -> u8 {
        let level = depth.unwrap_or_else(|| {
            let hashes = Self::hash_count(raw.trim_start_matches(' '));
            u8::try_from(hashes).unwrap_or(Self::MAX_LEVEL)
        });
        level.clamp(1, Self::MAX_LEVEL)
    }

    fn hash_count(s: &str) -> usize {
        s.bytes().take_while(|b| *b == Self::HASH).count()
    }
}
