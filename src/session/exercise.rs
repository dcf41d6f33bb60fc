use crate::text::tokenizer::{TokenMode, tokenize};

/// The selected passage plus its tokenization mode. Immutable for the life of
/// a practice session; any text or mode change builds a fresh exercise and
/// discards in-progress typing state.
#[derive(Clone, Debug)]
pub struct Exercise {
    pub title: Option<String>,
    pub text: String,
    pub mode: TokenMode,
    tokens: Vec<String>,
}

impl Exercise {
    pub fn new(title: Option<String>, text: impl Into<String>, mode: TokenMode) -> Self {
        let text = text.into();
        let tokens = tokenize(&text, mode);
        Self {
            title,
            text,
            mode,
            tokens,
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// An exercise with no tokens disables the input area entirely.
    pub fn is_typable(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// Presentational cursor: the number of completed (whitespace-terminated)
/// typed tokens, or the index of the trailing partial token. A trailing run
/// of whitespace counts the same as a single terminator.
pub fn current_word_index(input: &str, mode: TokenMode) -> usize {
    let typed = tokenize(input, mode);
    if typed.is_empty() {
        return 0;
    }
    if input.ends_with(char::is_whitespace) {
        typed.len()
    } else {
        typed.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exercise_tokenizes_on_construction() {
        let ex = Exercise::new(None, "Hi, world!", TokenMode::StripPunctuation);
        assert_eq!(ex.tokens(), ["Hi", "world"]);
        assert!(ex.is_typable());
    }

    #[test]
    fn punctuation_only_text_is_not_typable() {
        let ex = Exercise::new(None, "... !!! ???", TokenMode::StripPunctuation);
        assert!(!ex.is_typable());
    }

    #[test]
    fn index_is_zero_for_empty_input() {
        assert_eq!(current_word_index("", TokenMode::Verbatim), 0);
        assert_eq!(current_word_index("   ", TokenMode::Verbatim), 0);
    }

    #[test]
    fn partial_word_points_at_itself() {
        assert_eq!(current_word_index("a ca", TokenMode::Verbatim), 1);
    }

    #[test]
    fn trailing_space_advances_past_completed_word() {
        assert_eq!(current_word_index("a ", TokenMode::Verbatim), 1);
        assert_eq!(current_word_index("a cat ", TokenMode::Verbatim), 2);
    }

    #[test]
    fn trailing_whitespace_run_counts_once() {
        assert_eq!(current_word_index("a cat   ", TokenMode::Verbatim), 2);
    }
}
