//! Line assembly: turn the classified word stream into Markdown paragraphs.
//!
//! Grouping is purely adjacency-based: a new paragraph starts whenever the
//! line index of the incoming word differs from the previous word's. The
//! stream is consumed in OCR emission order, never sorted — if an engine
//! emitted two words of the same line index non-contiguously they would
//! become two separate paragraphs, which mirrors how the engine saw the
//! page.

/// Assemble `(text, is_bold, line_index)` triples into a Markdown string.
///
/// Bold words are wrapped in `**…**`; words on the same line are joined
/// with single spaces; completed lines are joined with a blank line so each
/// OCR line becomes its own paragraph. Words that are empty after trimming
/// contribute nothing, not even spacing or a line transition.
pub fn assemble<I, S>(words: I) -> String
where
    I: IntoIterator<Item = (S, bool, u32)>,
    S: AsRef<str>,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current_index: Option<u32> = None;
    let mut current_line: Vec<String> = Vec::new();

    for (text, is_bold, line_index) in words {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }

        let rendered = if is_bold {
            format!("**{trimmed}**")
        } else {
            trimmed.to_string()
        };

        if current_index != Some(line_index) {
            if !current_line.is_empty() {
                lines.push(current_line.join(" "));
            }
            current_line = vec![rendered];
            current_index = Some(line_index);
        } else {
            current_line.push(rendered);
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_group_by_line_and_bold_is_wrapped() {
        let out = assemble([("Hello", false, 0), ("World", true, 0), ("Next", false, 1)]);
        assert_eq!(out, "Hello **World**\n\nNext");
    }

    #[test]
    fn empty_text_contributes_nothing() {
        let out = assemble([("", false, 0), ("A", false, 0)]);
        assert_eq!(out, "A");
    }

    #[test]
    fn whitespace_only_text_contributes_nothing() {
        let out = assemble([("  \t ", true, 0), ("A", false, 0), (" ", false, 1)]);
        assert_eq!(out, "A");
    }

    #[test]
    fn non_contiguous_same_index_yields_separate_paragraphs() {
        let out = assemble([("a", false, 0), ("b", false, 1), ("c", false, 0)]);
        assert_eq!(out, "a\n\nb\n\nc");
    }

    #[test]
    fn empty_stream_yields_empty_string() {
        let out = assemble(Vec::<(&str, bool, u32)>::new());
        assert_eq!(out, "");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_from_words() {
        let out = assemble([(" padded ", true, 0)]);
        assert_eq!(out, "**padded**");
    }

    #[test]
    fn all_words_on_one_line_join_with_single_spaces() {
        let out = assemble([("a", false, 3), ("b", true, 3), ("c", false, 3)]);
        assert_eq!(out, "a **b** c");
    }

    #[test]
    fn an_empty_word_does_not_trigger_a_line_transition() {
        // The blank token on line 1 is skipped before the transition check,
        // so "a" and "b" still read as adjacent words of line 0.
        let out = assemble([("a", false, 0), ("", false, 1), ("b", false, 0)]);
        assert_eq!(out, "a b");
    }
}
