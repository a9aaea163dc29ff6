//! Flesch–Kincaid grade level.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::round_to;

/// sentence-like segments used for readability only
static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("static regex"));

/// Flesch–Kincaid grade, rounded to one decimal place.
///
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
///
/// Text without any words has grade `0.0`. textstat instead treats the
/// zero-division averages as 0 and reports `-15.6` for such text.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    let words = lexicon(text);
    if words.is_empty() {
        return 0.0;
    }
    let word_num = words.len() as f64;
    let sentence_num = readability_sentence_count(text) as f64;
    let syllable_num: usize = words.iter().map(|w| count_syllables(w)).sum();

    let avg_sentence_length = word_num / sentence_num;
    let avg_syllables_per_word = syllable_num as f64 / word_num;
    round_to(0.39 * avg_sentence_length + 11.8 * avg_syllables_per_word - 15.59, 1)
}

/// Whitespace tokens keeping only word characters and apostrophes.
/// Tokens that become empty (`—`, `...`) are dropped.
pub fn lexicon(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|tok| {
            tok.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '\'')
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Sentences for the readability formula.
/// Segments with two words or fewer are not counted; the result is at least 1.
///
/// This differs from the summary's sentence count, which counts terminal
/// punctuation characters.
pub fn readability_sentence_count(text: &str) -> usize {
    SEGMENT
        .find_iter(text)
        .filter(|m| lexicon(m.as_str()).len() > 2)
        .count()
        .max(1)
}

/// Vowel-group syllable estimate, at least 1 per word
pub fn count_syllables(word: &str) -> usize {
    const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];
    let word_lower = word.to_lowercase();

    let mut syllable_count = 0;
    let mut prev_was_vowel = false;
    for ch in word_lower.chars() {
        let is_vowel = VOWELS.contains(&ch);
        if is_vowel && !prev_was_vowel {
            syllable_count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    // silent 'e'
    if word_lower.ends_with('e') && syllable_count > 1 {
        syllable_count -= 1;
    }
    syllable_count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllables() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("reading"), 2);
        assert_eq!(count_syllables("extraordinary"), 5);
        assert_eq!(count_syllables("42"), 1);
    }

    #[test]
    fn lexicon_strips_punctuation() {
        assert_eq!(lexicon("Hello, world! -- don't"), vec!["Hello", "world", "don't"]);
    }

    #[test]
    fn lexicon_drops_unicode_dashes() {
        assert_eq!(lexicon("Hello — world. It's fine!"), vec!["Hello", "world", "It's", "fine"]);
        assert_eq!(lexicon("« naïve » café…"), vec!["naïve", "café"]);
    }

    #[test]
    fn short_segments_are_not_sentences() {
        assert_eq!(readability_sentence_count("Yes. No. The cat sat down."), 1);
        assert_eq!(readability_sentence_count("The cat sat. The dog ran off."), 2);
        assert_eq!(readability_sentence_count(""), 1);
    }

    #[test]
    fn grade_of_two_word_text() {
        // 0.39 * 2 + 11.8 * 1 - 15.59
        assert_eq!(flesch_kincaid_grade("Go now."), -3.0);
    }

    #[test]
    fn empty_text_has_zero_grade() {
        assert_eq!(flesch_kincaid_grade(""), 0.0);
        assert_eq!(flesch_kincaid_grade("... !!"), 0.0);
    }

    #[test]
    fn complex_text_scores_higher() {
        let simple = flesch_kincaid_grade("The cat sat on the mat. The dog ran to the park.");
        let complex = flesch_kincaid_grade(
            "The extraordinarily sophisticated implementation of the comprehensive \
             authentication infrastructure required considerable investigation.",
        );
        assert!(complex > simple + 5.0);
    }
}
