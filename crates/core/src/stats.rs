// ABOUTME: Text statistics for the article analysis dialog.
// ABOUTME: Counts lines, paragraphs, sentences, words, and characters of a text snapshot.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]").unwrap());
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Basic counts computed from a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub lines: usize,
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
}

/// Computes the statistics shown for an article's text.
///
/// - `lines` is the newline count plus one.
/// - `paragraphs` counts non-overlapping `\n\n` occurrences plus one.
///   Runs of blank lines and trailing newlines get no special handling.
/// - `sentences` counts spans terminated by `.`, `!`, or `?`.
/// - `words` counts word-boundary token matches.
/// - `characters` is the character count plus one. The off-by-one is
///   kept deliberately: the hosting application has always displayed it
///   this way, and its dialogs are compared against it.
pub fn analyze(text: &str) -> TextStats {
    TextStats {
        lines: text.matches('\n').count() + 1,
        paragraphs: text.matches("\n\n").count() + 1,
        sentences: SENTENCE_RE.find_iter(text).count(),
        words: WORD_RE.find_iter(text).count(),
        characters: text.chars().count() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mixed_terminators_and_paragraph_break() {
        let stats = analyze("a.b!c?\n\nd");
        assert_eq!(
            stats,
            TextStats {
                lines: 3,
                paragraphs: 2,
                sentences: 3,
                words: 4,
                characters: 10,
            }
        );
    }

    #[test]
    fn empty_input() {
        let stats = analyze("");
        assert_eq!(
            stats,
            TextStats {
                lines: 1,
                paragraphs: 1,
                sentences: 0,
                words: 0,
                characters: 1,
            }
        );
    }

    #[test]
    fn characters_count_chars_not_bytes() {
        // 4 chars + 1, not byte length + 1
        assert_eq!(analyze("日本語だ").characters, 5);
    }

    #[test]
    fn unterminated_trailing_text_is_not_a_sentence() {
        let stats = analyze("One. Two");
        assert_eq!(stats.sentences, 1);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn consecutive_blank_lines_count_once_per_pair() {
        // "\n\n\n" holds one non-overlapping "\n\n" occurrence
        assert_eq!(analyze("a\n\n\nb").paragraphs, 2);
        assert_eq!(analyze("a\n\n\n\nb").paragraphs, 3);
    }

    #[test]
    fn words_split_on_punctuation() {
        assert_eq!(analyze("it's a test").words, 4);
    }
}
