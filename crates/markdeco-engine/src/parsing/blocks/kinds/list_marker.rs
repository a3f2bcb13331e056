use std::sync::OnceLock;

use regex::Regex;

static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();

/// A bullet or ordered list marker at the start of an item's first line.
///
/// Byte offsets are relative to the start of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// Number of an ordered marker (`7.` / `7)`); `None` for bullets.
    pub ordinal: Option<u64>,
    /// Where the item's content starts on the first line.
    pub content: usize,
    /// Indentation that continuation lines may carry.
    pub indent: usize,
}

impl ListMarker {
    pub const BULLETS: [char; 3] = ['*', '+', '-'];

    /// Spaces after the marker beyond which content counts as indented code.
    const MAX_GAP: usize = 4;
    const TAB_STOP: usize = 4;

    fn regex() -> &'static Regex {
        MARKER_REGEX.get_or_init(|| {
            let bullets: String = Self::BULLETS
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect();
            Regex::new(&format!(r"^( {{0,3}})([{bullets}]|(\d{{1,9}})[.)])([ \t]*)"))
                .expect("Invalid list marker regex")
        })
    }

    /// Parses the marker on `line`, which must not contain a line break.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = Self::regex().captures(line)?;
        let marker_end = caps.get(2)?.end();
        let gap = caps.get(4).map_or(0, |m| m.len());
        let rest = &line[marker_end + gap..];
        if gap == 0 && !rest.is_empty() {
            return None;
        }
        let ordinal = caps.get(3).and_then(|m| m.as_str().parse().ok());

        let (content, indent) = if rest.is_empty() {
            (line.len(), marker_end + 1)
        } else if gap > Self::MAX_GAP {
            (marker_end + 1, marker_end + 1)
        } else {
            (marker_end + gap, marker_end + gap)
        };
        Some(Self {
            ordinal,
            content,
            indent,
        })
    }

    /// Returns the number of the ordered marker opening `raw`.
    pub fn ordinal(raw: &str) -> Option<u64> {
        Self::parse(raw.lines().next()?)?.ordinal
    }

    /// Strips the marker (and the task checkbox when `task` is set) from the
    /// first line of an item, and the content indent from the others.
    pub fn strip_item(raw: &str, task: bool) -> String {
        let mut lines = raw.split('\n');
        let Some(first) = lines.next() else {
            return String::new();
        };
        let Some(marker) = Self::parse(first) else {
            return raw.to_string();
        };

        let mut head = &first[marker.content..];
        if task {
            head = &head[Self::checkbox_len(head)..];
        }

        let mut out = vec![head];
        for line in lines {
            out.push(&line[Self::indent_len(line, marker.indent)..]);
        }
        out.join("\n")
    }

    /// Bytes of leading whitespace covering up to `indent` columns. Tabs
    /// advance to the next tab stop; a tab crossing `indent` is taken whole.
    fn indent_len(line: &str, indent: usize) -> usize {
        let mut column = 0usize;
        for (i, b) in line.bytes().enumerate() {
            if column >= indent {
                return i;
            }
            match b {
                b' ' => column += 1,
                b'\t' => column += Self::TAB_STOP - column % Self::TAB_STOP,
                _ => return i,
            }
        }
        line.len()
    }

    /// Length of a leading `[ ]` / `[x]` checkbox and the whitespace after it.
    fn checkbox_len(s: &str) -> usize {
        let b = s.as_bytes();
        if b.len() < 3 || b[0] != b'[' || b[2] != b']' || !matches!(b[1], b' ' | b'x' | b'X') {
            return 0;
        }
        3 + b[3..]
            .iter()
            .take_while(|c| matches!(c, b' ' | b'\t'))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("* foo", None, 2)]
    #[case("- foo", None, 2)]
    #[case("+ foo", None, 2)]
    #[case("1. foo", Some(1), 3)]
    #[case("99. foo", Some(99), 4)]
    #[case("7) foo", Some(7), 3)]
    #[case("  - foo", None, 4)]
    fn parse_markers(#[case] line: &str, #[case] ordinal: Option<u64>, #[case] content: usize) {
        let marker = ListMarker::parse(line).unwrap();
        assert_eq!(marker.ordinal, ordinal);
        assert_eq!(marker.content, content);
    }

    #[rstest]
    #[case("foo")]
    #[case("*foo")]
    #[case("1.foo")]
    #[case("    - code")]
    fn not_markers(#[case] line: &str) {
        assert_eq!(ListMarker::parse(line), None);
    }

    #[test]
    fn blank_item_content_is_line_end() {
        let marker = ListMarker::parse("-").unwrap();
        assert_eq!(marker.content, 1);
        assert_eq!(marker.indent, 2);
    }

    #[test]
    fn wide_gap_keeps_one_space() {
        let marker = ListMarker::parse("-      code").unwrap();
        assert_eq!(marker.content, 2);
    }

    #[rstest]
    #[case("7. foo\n10. bar", Some(7))]
    #[case("0. foo", Some(0))]
    #[case("* foo", None)]
    fn ordinal_of_first_marker(#[case] raw: &str, #[case] expected: Option<u64>) {
        assert_eq!(ListMarker::ordinal(raw), expected);
    }

    #[rstest]
    #[case("* foo", false, "foo")]
    #[case("99. foo", false, "foo")]
    #[case("- [ ] todo", true, "todo")]
    #[case("- [x] done", true, "done")]
    #[case("* a\n  * b", false, "a\n* b")]
    #[case("1. a\n   b", false, "a\nb")]
    #[case("- a\nlazy", false, "a\nlazy")]
    #[case("- a\n\t- b", false, "a\n- b")]
    #[case("1. a\n \tb", false, "a\nb")]
    #[case("- a\n     b", false, "a\n   b")]
    #[case("-", false, "")]
    fn strip_item(#[case] raw: &str, #[case] task: bool, #[case] expected: &str) {
        assert_eq!(ListMarker::strip_item(raw, task), expected);
    }
}
