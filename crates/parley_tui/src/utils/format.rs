//! Text measuring and wrapping by terminal column width.

use unicode_width::UnicodeWidthStr;

/// Columns `s` occupies in a terminal.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Word-wrap text to lines of at most `width` columns (by word boundary).
/// Long words are pushed as their own line. Returns empty vec for empty or whitespace-only input.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut line = String::new();
    for word in s.split_whitespace() {
        let word_width = display_width(word);
        let need = if line.is_empty() {
            word_width
        } else {
            display_width(&line) + 1 + word_width
        };
        if need <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        } else {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if word_width <= width {
                line = word.to_string();
            } else {
                out.push(word.to_string());
            }
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_lines_by_width() {
        let lines = wrap_lines("one two three four", 8);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_lines_empty() {
        assert!(wrap_lines("", 10).is_empty());
        assert!(wrap_lines("   ", 10).is_empty());
        assert!(wrap_lines("text", 0).is_empty());
    }

    #[test]
    fn wrap_measures_columns_not_bytes() {
        // Each glyph is 3 bytes but 1 column.
        assert_eq!(wrap_lines("❯ ◆ •", 5), vec!["❯ ◆ •"]);
        assert_eq!(display_width("世界"), 4);
    }
}
