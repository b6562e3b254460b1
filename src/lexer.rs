//! Splitting of a raw input line into the argument vector.

/// Characters that separate tokens: space, tab, carriage return, newline and bell.
pub const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Split `line` into its tokens.
///
/// A token is a maximal run of non-delimiter characters. Delimiters are
/// dropped and runs of them collapse, so no empty token is ever produced. No
/// quoting, escaping or substitution is performed.
///
/// The tokens borrow from `line`; the first one is the command name. An empty
/// result means the line held no command.
pub fn split_into_tokens(line: &str) -> Vec<&str> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_delimiters_collapse() {
        assert_eq!(split_into_tokens("ls  -la   /tmp"), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_every_delimiter_splits() {
        assert_eq!(
            split_into_tokens("a\tb\rc\nd\x07e f"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
    }

    #[test]
    fn test_blank_lines_have_no_tokens() {
        assert!(split_into_tokens("").is_empty());
        assert!(split_into_tokens(" \t\r\n\x07  ").is_empty());
    }

    #[test]
    fn test_leading_and_trailing_delimiters_are_dropped() {
        assert_eq!(split_into_tokens("  echo hi \t"), vec!["echo", "hi"]);
    }

    #[test]
    fn test_quotes_and_dollars_are_plain_text() {
        assert_eq!(
            split_into_tokens("echo \"a b\" $HOME"),
            vec!["echo", "\"a", "b\"", "$HOME"]
        );
    }
}
