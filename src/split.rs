//! Partition text into a fixed number of contiguous, line-aligned fragments.

use std::num::NonZeroUsize;

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines. `\r\n` counts as one break and a trailing break
/// does not produce an empty last line.
pub fn lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn chunk_size(line_count: usize, n: NonZeroUsize) -> usize {
    (line_count / n.get()).max(1)
}

/// Split `text` into exactly `n` fragments of `max(1, lines / n)` lines each.
///
/// Lines past `n * chunk_size` belong to no fragment, so an uneven line count
/// loses its tail. See [`dropped_lines`].
pub fn split(text: &str, n: NonZeroUsize) -> Vec<String> {
    let lines = lines(text);
    let size = chunk_size(lines.len(), n);
    (0..n.get())
        .map(|i| {
            let start = (i * size).min(lines.len());
            let end = ((i + 1) * size).min(lines.len());
            lines[start..end].join("\n")
        })
        .collect()
}

/// Number of tail lines that [`split`] leaves out of every fragment.
pub fn dropped_lines(line_count: usize, n: NonZeroUsize) -> usize {
    line_count.saturating_sub(n.get() * chunk_size(line_count, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn lines_handles_mixed_breaks() {
        assert_eq!(lines("a\r\nb\rc\nd\n"), vec!["a", "b", "c", "d"]);
        assert_eq!(lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(lines("x\u{2028}y"), vec!["x", "y"]);
        assert!(lines("").is_empty());
    }

    #[test]
    fn even_split_covers_every_line() {
        let fragments = split("1\n2\n3\n4\n5\n6", nz(3));
        assert_eq!(fragments, vec!["1\n2", "3\n4", "5\n6"]);
        assert_eq!(dropped_lines(6, nz(3)), 0);
    }

    #[test]
    fn uneven_split_drops_the_tail() {
        // 7 lines over 3 fragments: chunk size 2, line "7" is in no fragment.
        let fragments = split("1\n2\n3\n4\n5\n6\n7", nz(3));
        assert_eq!(fragments, vec!["1\n2", "3\n4", "5\n6"]);
        assert!(fragments.iter().all(|f| !f.contains('7')));
        assert_eq!(dropped_lines(7, nz(3)), 1);
    }

    #[test]
    fn fewer_lines_than_fragments_pads_with_empty() {
        let fragments = split("a\nb\nc", nz(5));
        assert_eq!(fragments, vec!["a", "b", "c", "", ""]);
        assert_eq!(dropped_lines(3, nz(5)), 0);
    }

    #[test]
    fn empty_text_yields_n_empty_fragments() {
        let fragments = split("", nz(8));
        assert_eq!(fragments.len(), 8);
        assert!(fragments.iter().all(String::is_empty));
    }

    #[test]
    fn single_fragment_keeps_whole_text() {
        assert_eq!(split("a b\na b\nc", nz(1)), vec!["a b\na b\nc"]);
    }
}
