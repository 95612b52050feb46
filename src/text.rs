//! UTF-8 char-boundary helpers, ticker string splicing and word wrap.
//!
//! All offsets and lengths here count Unicode scalar values, never bytes.

/// Number of chars in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Appends up to `count` chars of `s` to `dst`, starting at char index
/// `skip`. Out-of-range values simply shorten the copy.
pub(crate) fn push_chars(dst: &mut String, s: &str, skip: usize, count: usize) {
    if count == 0 {
        return;
    }
    let mut indices = s.char_indices().skip(skip);
    let Some((start, _)) = indices.next() else {
        return;
    };
    match indices.nth(count - 1) {
        Some((end, _)) => dst.push_str(&s[start..end]),
        None => dst.push_str(&s[start..]),
    }
}

/// One source range of a loop-ticker window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Segment {
    pub offset: usize,
    pub len: usize,
}

/// Splices the three loop segments (text tail, spacer, text head) into `dst`.
pub(crate) fn build_ticker_loop_string(
    text: &str,
    spacer: &str,
    segments: &[Segment; 3],
    dst: &mut String,
) {
    push_chars(dst, text, segments[0].offset, segments[0].len);
    push_chars(dst, spacer, segments[1].offset, segments[1].len);
    push_chars(dst, text, segments[2].offset, segments[2].len);
}

/// Appends a `count`-line window of `lines` starting at `line_offset`,
/// newline-separated. Indices wrap modulo `lines.len() + 1`; the extra
/// index is a blank gap line so loop mode visibly separates repetitions.
pub(crate) fn build_line_ticker_string(
    lines: &[String],
    line_offset: usize,
    count: usize,
    dst: &mut String,
) {
    let period = lines.len() + 1;
    for i in 0..count {
        let index = (line_offset + i) % period;
        if let Some(line) = lines.get(index) {
            dst.push_str(line);
        }
        if i + 1 < count {
            dst.push('\n');
        }
    }
}

/// Greedy word wrap to at most `line_chars` chars per line.
///
/// Explicit newlines in the input are preserved. A single word longer than
/// `line_chars` is left unbroken on its own line.
pub(crate) fn word_wrap(text: &str, line_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut line = String::new();
        let mut line_len = 0usize;
        for word in raw.split(' ') {
            let word_len = char_len(word);
            if line_len == 0 {
                line.push_str(word);
                line_len = word_len;
            } else if line_len + 1 + word_len <= line_chars {
                line.push(' ');
                line.push_str(word);
                line_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_len = word_len;
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_chars_counts_scalars_not_bytes() {
        let mut dst = String::new();
        push_chars(&mut dst, "héllo wörld", 2, 5);
        assert_eq!(dst, "llo w");
    }

    #[test]
    fn push_chars_clamps_out_of_range() {
        let mut dst = String::new();
        push_chars(&mut dst, "abc", 5, 2);
        assert_eq!(dst, "");
        push_chars(&mut dst, "abc", 1, 99);
        assert_eq!(dst, "bc");
        push_chars(&mut dst, "abc", 0, 0);
        assert_eq!(dst, "bc");
    }

    #[test]
    fn loop_splice_concatenates_three_segments() {
        let mut dst = String::new();
        build_ticker_loop_string(
            "abcdef",
            " | ",
            &[
                Segment { offset: 4, len: 2 },
                Segment { offset: 0, len: 3 },
                Segment { offset: 0, len: 1 },
            ],
            &mut dst,
        );
        assert_eq!(dst, "ef | a");
    }

    #[test]
    fn line_window_wraps_through_blank_gap() {
        let lines: Vec<String> = ["one", "two", "three"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut dst = String::new();
        build_line_ticker_string(&lines, 2, 3, &mut dst);
        // Index 3 is the gap line, index 4 wraps to "one".
        assert_eq!(dst, "three\n\none");
    }

    #[test]
    fn word_wrap_honors_width_and_newlines() {
        let lines = word_wrap("the quick brown fox\njumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        for line in &lines {
            assert!(char_len(line) <= 10);
        }
    }

    #[test]
    fn word_wrap_leaves_overlong_words_unbroken() {
        let lines = word_wrap("hi incomprehensibilities yo", 8);
        assert_eq!(lines, vec!["hi", "incomprehensibilities", "yo"]);
    }

    #[test]
    fn word_wrap_preserves_blank_lines() {
        let lines = word_wrap("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }
}
