//! Bullet re-indentation
//!
//! Notes are written with four spaces per nesting level, Zulip expects two.
//! The least indented line of a body is made flush-left first, so nesting is
//! always relative to the body itself.

/// Spaces per nesting level in the source notes
pub const SOURCE_INDENT: usize = 4;
/// Spaces per nesting level in the formatted output
pub const TARGET_INDENT: usize = 2;

const BULLET_PREFIX: &str = "- ";

pub fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(BULLET_PREFIX)
}

/// Nesting level of a line, from its leading whitespace (in characters)
pub fn indent_level(line: &str) -> usize {
    leading_whitespace(line) / SOURCE_INDENT
}

pub fn count_bullets(body: &str) -> usize {
    body.lines().filter(|line| is_bullet(line)).count()
}

/// Re-indent the bullet lines of `body` to two spaces per level.
///
/// A whitespace-only body becomes empty and a body without bullets is
/// returned unchanged.
pub fn reindent(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    if !body.lines().any(is_bullet) {
        return body.to_string();
    }

    let min_indent = body
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_whitespace)
        .min()
        .unwrap_or(0);

    body.lines()
        .map(|line| {
            let line = skip_chars(line, min_indent);
            let stripped = line.trim_start();
            if stripped.starts_with(BULLET_PREFIX) {
                format!("{}{}", " ".repeat(TARGET_INDENT * indent_level(line)), stripped)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_level() {
        assert_eq!(indent_level("- top"), 0);
        assert_eq!(indent_level("   - three spaces"), 0);
        assert_eq!(indent_level("    - four"), 1);
        assert_eq!(indent_level("        - eight"), 2);
    }

    #[test]
    fn test_outermost_bullet_becomes_flush_left() {
        assert_eq!(reindent("    - top\n        - child"), "- top\n  - child");
    }

    #[test]
    fn test_four_spaces_become_two() {
        let body = "- a\n    - b\n        - c\n    - d";
        assert_eq!(reindent(body), "- a\n  - b\n    - c\n  - d");
    }

    #[test]
    fn test_two_space_source_collapses_to_same_level() {
        // two spaces is below one source level
        assert_eq!(reindent("- a\n  - b"), "- a\n- b");
    }

    #[test]
    fn test_non_bullet_lines_only_lose_common_indent() {
        let body = "    - item\n      continued text\n\n    - next";
        assert_eq!(reindent(body), "- item\n  continued text\n\n- next");
    }

    #[test]
    fn test_body_without_bullets_is_unchanged() {
        let body = "    plain text\n        more text\n";
        assert_eq!(reindent(body), body);
    }

    #[test]
    fn test_whitespace_body_becomes_empty() {
        assert_eq!(reindent(""), "");
        assert_eq!(reindent("  \n\t\n"), "");
    }

    #[test]
    fn test_leading_blank_lines_survive() {
        assert_eq!(reindent("\n\n- a\n    - b\n\n"), "\n\n- a\n  - b\n");
    }

    #[test]
    fn test_whitespace_counted_in_chars() {
        let body = "\u{3000}\u{3000}\u{3000}\u{3000}- wide\n- top";
        assert_eq!(reindent(body), "  - wide\n- top");
    }

    #[test]
    fn test_count_bullets() {
        assert_eq!(count_bullets("- a\n    - b\ntext\n"), 2);
        assert_eq!(count_bullets(""), 0);
    }
}
