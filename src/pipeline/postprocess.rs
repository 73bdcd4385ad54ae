//! Post-processing: deterministic whitespace cleanup before writing.
//!
//! The assembler produces clean paragraph text already; these rules only
//! guard against engine quirks (a stray `\r` surviving in recognized text,
//! trailing spaces on a line) and normalise the on-disk form so every
//! output file ends with exactly one newline. Each rule is a pure
//! `&str → String` function and independently testable.

/// Apply all cleanup rules to assembled Markdown, in order:
///
/// 1. Normalise line endings (CRLF/CR → LF)
/// 2. Trim trailing whitespace per line
/// 3. Ensure the text ends with exactly one newline
pub fn clean_markdown(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = trim_trailing_whitespace(&s);
    ensure_final_newline(&s)
}

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

fn trim_trailing_whitespace(input: &str) -> String {
    input
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

fn ensure_final_newline(input: &str) -> String {
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        String::from("\n")
    } else {
        format!("{}\n", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_structure_is_preserved() {
        assert_eq!(clean_markdown("Hello **World**\n\nNext"), "Hello **World**\n\nNext\n");
    }

    #[test]
    fn crlf_is_normalised() {
        assert_eq!(clean_markdown("a\r\nb\rc"), "a\nb\nc\n");
    }

    #[test]
    fn trailing_spaces_are_trimmed_per_line() {
        assert_eq!(clean_markdown("a  \n\nb\t"), "a\n\nb\n");
    }

    #[test]
    fn exactly_one_final_newline() {
        assert_eq!(clean_markdown("a\n\n\n"), "a\n");
        assert_eq!(clean_markdown("a"), "a\n");
    }

    #[test]
    fn empty_input_becomes_a_single_newline() {
        assert_eq!(clean_markdown(""), "\n");
    }
}
