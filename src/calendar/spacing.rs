//! Cleanup of joined calendar rows.
//!
//! Cells are joined with separators sized for padded two-column cells, so a
//! bracketed cell leaves extra spaces around it.  [`normalize_spacing()`]
//! removes them:
//!
//! 1. A single space directly before a two-digit bracketed cell (`[DD]`) is
//!    dropped.
//! 2. A single space directly after any `]` is dropped.
//!
//! Finally the line is trimmed.

/// Apply both rewrite passes to `line` and trim surrounding whitespace
pub fn normalize_spacing(line: &str) -> String {
    let line = drop_space_before_wide_brackets(line);
    let line = line.replace("] ", "]");
    String::from(line.trim())
}

fn drop_space_before_wide_brackets(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for (i, ch) in line.char_indices() {
        // `ch` is ASCII here, so `i + 1` is a char boundary.
        if ch == ' ' && line.get(i + 1..).is_some_and(starts_with_wide_bracket) {
            continue;
        }
        out.push(ch);
    }
    out
}

fn starts_with_wide_bracket(s: &str) -> bool {
    matches!(
        s.as_bytes(),
        [b'[', d1, d2, b']', ..] if d1.is_ascii_digit() && d2.is_ascii_digit()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_bracket_fragment() {
        assert_eq!(normalize_spacing(" [10] 11"), "[10]11");
    }

    #[test]
    fn test_narrow_bracket_keeps_leading_space() {
        assert_eq!(normalize_spacing("Jan     [1]  2  3"), "Jan     [1] 2  3");
    }

    #[test]
    fn test_only_one_space_removed_each_side() {
        assert_eq!(normalize_spacing(" 9  [10]  11"), "9 [10] 11");
        assert_eq!(normalize_spacing("Su    [5]   6"), "Su    [5]  6");
    }

    #[test]
    fn test_brackets_at_line_edges() {
        assert_eq!(normalize_spacing("[31] "), "[31]");
        assert_eq!(normalize_spacing("Oct   30 [31]          "), "Oct   30[31]");
    }

    #[test]
    fn test_non_digit_brackets_untouched_by_first_pass() {
        assert_eq!(normalize_spacing("a [ab] b"), "a [ab]b");
        assert_eq!(normalize_spacing("a [100] b"), "a [100]b");
    }

    #[test]
    fn test_plain_line_is_only_trimmed() {
        assert_eq!(normalize_spacing("  Jan   1  2  3    "), "Jan   1  2  3");
        assert_eq!(normalize_spacing(""), "");
    }
}
