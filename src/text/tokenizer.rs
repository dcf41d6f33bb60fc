use icu_normalizer::ComposingNormalizer;

/// Punctuation stripped from token edges in [`TokenMode::StripPunctuation`]
/// and from words before dictionary lookup.
pub const PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')'];

/// How raw text is split into comparable word tokens. The same mode must be
/// applied to both the reference text and the typed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenMode {
    /// Tokens are emitted verbatim, punctuation and all.
    Verbatim,
    /// Leading/trailing punctuation is trimmed; tokens that become empty are dropped.
    StripPunctuation,
}

impl TokenMode {
    pub fn from_check_punctuation(check_punctuation: bool) -> Self {
        if check_punctuation {
            TokenMode::Verbatim
        } else {
            TokenMode::StripPunctuation
        }
    }
}

/// Split text into word tokens. Whitespace runs delimit tokens, so
/// empty/whitespace-only input yields an empty vec.
pub fn tokenize(text: &str, mode: TokenMode) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let token = match mode {
                TokenMode::Verbatim => word,
                TokenMode::StripPunctuation => word.trim_matches(PUNCTUATION),
            };
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}

/// NFC-compose typed input so dead-key accent sequences compare equal to the
/// composed form stories are stored in.
pub fn compose(input: &str) -> String {
    ComposingNormalizer::new_nfc().normalize(input).into_owned()
}

/// Normalize a word for dictionary lookup: trim punctuation, case-fold.
/// Returns an empty string for pure-punctuation input (callers skip those).
pub fn normalize_for_lookup(word: &str) -> String {
    word.trim_matches(PUNCTUATION).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_input_yield_no_tokens() {
        assert!(tokenize("", TokenMode::Verbatim).is_empty());
        assert!(tokenize("   \t\n  ", TokenMode::StripPunctuation).is_empty());
    }

    #[test]
    fn verbatim_mode_keeps_punctuation() {
        assert_eq!(
            tokenize("Hi, world!", TokenMode::Verbatim),
            vec!["Hi,", "world!"]
        );
    }

    #[test]
    fn strip_mode_trims_punctuation_from_both_ends() {
        assert_eq!(
            tokenize("Hi, world!", TokenMode::StripPunctuation),
            vec!["Hi", "world"]
        );
        assert_eq!(
            tokenize("\"(well...)\" said she.", TokenMode::StripPunctuation),
            vec!["well", "said", "she"]
        );
    }

    #[test]
    fn strip_mode_drops_pure_punctuation_tokens() {
        assert_eq!(
            tokenize("a ... b", TokenMode::StripPunctuation),
            vec!["a", "b"]
        );
    }

    #[test]
    fn interior_punctuation_survives_stripping() {
        assert_eq!(
            tokenize("don't o'clock", TokenMode::StripPunctuation),
            vec!["don't", "o'clock"]
        );
    }

    #[test]
    fn strip_mode_is_idempotent() {
        let text = "\"Who will help me plant the seeds?\" she asked.";
        let once = tokenize(text, TokenMode::StripPunctuation);
        let rejoined = once.join(" ");
        let twice = tokenize(&rejoined, TokenMode::StripPunctuation);
        assert_eq!(once, twice);
    }

    #[test]
    fn consecutive_spaces_do_not_create_empty_tokens() {
        assert_eq!(
            tokenize("a  cat   sat", TokenMode::Verbatim),
            vec!["a", "cat", "sat"]
        );
    }

    #[test]
    fn compose_joins_combining_accents() {
        // 'e' + U+0301 combining acute -> U+00E9
        assert_eq!(compose("cafe\u{301}"), "caf\u{e9}");
    }

    #[test]
    fn compose_passes_already_composed_text_through() {
        let composed = compose("caf\u{e9} crème");
        assert_eq!(composed, "caf\u{e9} crème");
    }

    #[test]
    fn normalize_for_lookup_strips_and_folds() {
        assert_eq!(normalize_for_lookup("\"Penicillin,\""), "penicillin");
        assert_eq!(normalize_for_lookup("..."), "");
    }
}
