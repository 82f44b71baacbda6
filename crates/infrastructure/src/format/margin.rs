//! Two-space margin for text-block content.
//!
//! A text block ends at the first line starting with `}`, so content is
//! shifted right by [`MARGIN`] when written and shifted back when read.
//! Empty lines stay empty. Lines without the full margin are read as they
//! are, which keeps hand-written files with unindented content readable.

/// Indentation added in front of every non-empty content line.
pub const MARGIN: &str = "  ";

/// Adds the margin to every non-empty line. Line endings become `\n`.
#[must_use]
pub fn indent(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                String::new()
            } else {
                format!("{MARGIN}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes one margin from every line that carries it.
#[must_use]
pub fn outdent(content: &str) -> String {
    content
        .split('\n')
        .map(|line| line.strip_prefix(MARGIN).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indent_leaves_no_line_in_column_zero() {
        let indented = indent("{\n  \"a\": 1\n\n}");
        assert_eq!(indented, "  {\n    \"a\": 1\n\n  }");
        assert!(indented.lines().all(|line| !line.starts_with('}')));
    }

    #[test]
    fn test_outdent_removes_one_margin() {
        assert_eq!(outdent("  {\n    \"a\": 1\n  }"), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_indent_drops_carriage_returns() {
        assert_eq!(indent("a\r\nb\r"), "  a\n  b");
    }

    #[test]
    fn test_outdent_keeps_lines_without_margin() {
        assert_eq!(outdent("plain\n text\n\tx"), "plain\n text\n\tx");
    }

    #[test]
    fn test_outdent_undoes_indent() {
        for content in ["}", " one space", "\n\nlead", "   \n}\n  deep", "a\n"] {
            assert_eq!(outdent(&indent(content)), content, "content: {content:?}");
        }
    }
}
