/// Per-position comparison between a reference token and a typed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub typed: String,
    pub reference: String,
    pub correct: bool,
}

/// A genuinely misspelled word: both sides present but unequal. Trailing
/// extra/missing words stay out of this list (they still appear as incorrect
/// verdicts for the inline rendering).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellingError {
    pub typed: String,
    pub reference: String,
}

#[derive(Clone, Debug, Default)]
pub struct CheckReport {
    pub verdicts: Vec<Verdict>,
    pub errors: Vec<SpellingError>,
    pub correct_count: usize,
}

/// Walk both token sequences positionally. A missing side compares as the
/// empty string and can never be correct, so `verdicts.len()` always equals
/// `max(reference.len(), typed.len())`.
pub fn score(reference: &[String], typed: &[String], case_sensitive: bool) -> CheckReport {
    let len = reference.len().max(typed.len());
    let mut report = CheckReport {
        verdicts: Vec::with_capacity(len),
        ..CheckReport::default()
    };

    for i in 0..len {
        let reference_word = reference.get(i).map(String::as_str).unwrap_or("");
        let typed_word = typed.get(i).map(String::as_str).unwrap_or("");

        let correct = !reference_word.is_empty()
            && !typed_word.is_empty()
            && words_equal(reference_word, typed_word, case_sensitive);

        if correct {
            report.correct_count += 1;
        } else if !reference_word.is_empty() && !typed_word.is_empty() {
            report.errors.push(SpellingError {
                typed: typed_word.to_string(),
                reference: reference_word.to_string(),
            });
        }

        report.verdicts.push(Verdict {
            typed: typed_word.to_string(),
            reference: reference_word.to_string(),
            correct,
        });
    }

    report
}

pub fn words_equal(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_inputs_give_empty_report() {
        let report = score(&[], &[], false);
        assert!(report.verdicts.is_empty());
        assert!(report.errors.is_empty());
        assert_eq!(report.correct_count, 0);
    }

    #[test]
    fn verdict_count_is_max_of_both_lengths() {
        let report = score(&toks(&["a", "b", "c"]), &toks(&["a"]), false);
        assert_eq!(report.verdicts.len(), 3);

        let report = score(&toks(&["a"]), &toks(&["a", "b", "c", "d"]), false);
        assert_eq!(report.verdicts.len(), 4);
    }

    #[test]
    fn case_rule_controls_equality() {
        let report = score(&toks(&["Hello"]), &toks(&["hello"]), false);
        assert!(report.verdicts[0].correct);

        let report = score(&toks(&["Hello"]), &toks(&["hello"]), true);
        assert!(!report.verdicts[0].correct);
    }

    #[test]
    fn missing_words_are_incorrect_but_not_errors() {
        // Reference longer than typed: the trailing verdicts are incorrect
        // placeholders, not review-list entries.
        let report = score(&toks(&["one", "two", "three"]), &toks(&["one"]), false);
        assert!(report.verdicts[0].correct);
        assert!(!report.verdicts[1].correct);
        assert!(!report.verdicts[2].correct);
        assert_eq!(report.verdicts[2].typed, "");
        assert!(report.errors.is_empty());
    }

    #[test]
    fn extra_typed_words_are_incorrect_but_not_errors() {
        let report = score(&toks(&["one"]), &toks(&["one", "oops"]), false);
        assert_eq!(report.verdicts.len(), 2);
        assert!(!report.verdicts[1].correct);
        assert_eq!(report.verdicts[1].reference, "");
        assert!(report.errors.is_empty());
    }

    #[test]
    fn mismatched_words_land_in_the_error_list() {
        let report = score(
            &toks(&["A", "cat", "sat"]),
            &toks(&["a", "Cat", "sit"]),
            false,
        );
        assert!(report.verdicts[0].correct);
        assert!(report.verdicts[1].correct);
        assert!(!report.verdicts[2].correct);
        assert_eq!(
            report.errors,
            vec![SpellingError {
                typed: "sit".to_string(),
                reference: "sat".to_string(),
            }]
        );
        assert_eq!(report.correct_count, 2);
    }
}
