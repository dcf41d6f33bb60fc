use crate::text::scorer::words_equal;
use crate::text::tokenizer::{PUNCTUATION, TokenMode, tokenize};

/// What the prompter wants the host to do after a keystroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    /// Speak the next reference word out loud.
    Speak(String),
    /// The just-completed word was wrong; play the error tone.
    ErrorTone,
}

/// Decide whether the latest keystroke completed a word and what to do about
/// it. Fires only when the input grew and now ends in whitespace, so deleting
/// back over a space never re-triggers a prompt. Returns no cue when the
/// exercise is exhausted or the typed word has no reference counterpart.
pub fn word_completion_cue(
    prev_input: &str,
    new_input: &str,
    reference: &[String],
    mode: TokenMode,
    case_sensitive: bool,
) -> Option<Cue> {
    if new_input.chars().count() <= prev_input.chars().count() {
        return None;
    }
    if !new_input.ends_with(char::is_whitespace) {
        return None;
    }

    let typed = tokenize(new_input, mode);
    let completed_idx = typed.len().checked_sub(1)?;
    let completed = &typed[completed_idx];
    let reference_word = reference.get(completed_idx)?;

    if words_equal(completed, reference_word, case_sensitive) {
        let next = reference.get(typed.len())?;
        let spoken = speakable(next, mode);
        if spoken.is_empty() {
            None
        } else {
            Some(Cue::Speak(spoken))
        }
    } else {
        Some(Cue::ErrorTone)
    }
}

/// Verbatim-mode tokens still carry punctuation; trim it before handing the
/// word to a speech engine.
fn speakable(word: &str, mode: TokenMode) -> String {
    match mode {
        TokenMode::Verbatim => word.trim_end_matches(PUNCTUATION).to_lowercase(),
        TokenMode::StripPunctuation => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn no_cue_without_trailing_whitespace() {
        let cue = word_completion_cue(
            "a ca",
            "a cat",
            &reference(&["a", "cat", "sat"]),
            TokenMode::StripPunctuation,
            false,
        );
        assert_eq!(cue, None);
    }

    #[test]
    fn no_cue_when_input_shrank() {
        // Deleting back to a space must not prompt again.
        let cue = word_completion_cue(
            "a cat s",
            "a cat ",
            &reference(&["a", "cat", "sat"]),
            TokenMode::StripPunctuation,
            false,
        );
        assert_eq!(cue, None);
    }

    #[test]
    fn correct_word_speaks_the_next_one() {
        let cue = word_completion_cue(
            "a cat",
            "a cat ",
            &reference(&["a", "cat", "sat"]),
            TokenMode::StripPunctuation,
            false,
        );
        assert_eq!(cue, Some(Cue::Speak("sat".to_string())));
    }

    #[test]
    fn incorrect_word_requests_the_error_tone() {
        let cue = word_completion_cue(
            "a cot",
            "a cot ",
            &reference(&["a", "cat", "sat"]),
            TokenMode::StripPunctuation,
            false,
        );
        assert_eq!(cue, Some(Cue::ErrorTone));
    }

    #[test]
    fn exhausted_exercise_stays_silent() {
        let cue = word_completion_cue(
            "a cat sat",
            "a cat sat ",
            &reference(&["a", "cat", "sat"]),
            TokenMode::StripPunctuation,
            false,
        );
        assert_eq!(cue, None);
    }

    #[test]
    fn typing_past_the_reference_stays_silent() {
        let cue = word_completion_cue(
            "a cat sat extra",
            "a cat sat extra ",
            &reference(&["a", "cat", "sat"]),
            TokenMode::StripPunctuation,
            false,
        );
        assert_eq!(cue, None);
    }

    #[test]
    fn case_rule_applies_to_the_completed_word() {
        let strict = word_completion_cue(
            "A Cat",
            "A Cat ",
            &reference(&["A", "cat", "sat"]),
            TokenMode::StripPunctuation,
            true,
        );
        assert_eq!(strict, Some(Cue::ErrorTone));

        let loose = word_completion_cue(
            "A Cat",
            "A Cat ",
            &reference(&["A", "cat", "sat"]),
            TokenMode::StripPunctuation,
            false,
        );
        assert_eq!(loose, Some(Cue::Speak("sat".to_string())));
    }

    #[test]
    fn verbatim_mode_strips_punctuation_before_speaking() {
        let cue = word_completion_cue(
            "A cat,",
            "A cat, ",
            &reference(&["A", "cat,", "sat."]),
            TokenMode::Verbatim,
            false,
        );
        assert_eq!(cue, Some(Cue::Speak("sat".to_string())));
    }
}
