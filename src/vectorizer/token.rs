use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// TF-IDF vocabulary tokens: runs of two or more word characters
static VOCAB_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("static regex"));

/// Plain word tokens: any run of word characters
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("static regex"));

/// Lowercased vocabulary tokens (`\b\w\w+\b`) of `text`, in order of appearance
///
/// # Arguments
/// * `text` - source text
///
/// # Returns
/// * `Vec<String>` - tokens including stop words
pub fn vocab_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    VOCAB_TOKEN.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Lowercased word tokens (`\b\w+\b`) of `text`, in order of appearance
///
/// # Arguments
/// * `text` - source text
///
/// # Returns
/// * `Vec<String>` - tokens including stop words
pub fn word_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_TOKEN.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// TokenFrequency
/// Counts token occurrences inside one document.
/// Insertion order of tokens is kept, so equal counts rank by first appearance.
///
/// # Examples
/// ```
/// use plagiarism_checker::TokenFrequency;
/// let mut token_freq = TokenFrequency::new();
/// token_freq.add_token("token1");
/// token_freq.add_token("token2");
/// token_freq.add_token("token1");
///
/// assert_eq!(token_freq.token_count("token1"), 2);
/// assert_eq!(token_freq.most_frequent(1), vec![("token1", 2)]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

/// Adding tokens
impl TokenFrequency {
    /// Create an empty TokenFrequency
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Add one token
    ///
    /// # Arguments
    /// * `token` - token to add
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// Add several tokens
    ///
    /// # Arguments
    /// * `tokens` - slice of tokens to add
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where T: AsRef<str>
    {
        for token in tokens {
            let token_str = token.as_ref();
            self.add_token(token_str);
        }
        self
    }

    /// Add every token that `keep` accepts
    ///
    /// # Arguments
    /// * `tokens` - slice of tokens
    /// * `keep` - predicate; tokens returning false are skipped
    #[inline]
    pub fn add_tokens_filtered<T, F>(&mut self, tokens: &[T], keep: F) -> &mut Self
    where
        T: AsRef<str>,
        F: Fn(&str) -> bool,
    {
        for token in tokens {
            let token_str = token.as_ref();
            if keep(token_str) {
                self.add_token(token_str);
            }
        }
        self
    }
}

/// Reading counts
impl TokenFrequency {
    /// Occurrence count of a token
    ///
    /// # Arguments
    /// * `token` - token
    ///
    /// # Returns
    /// * `u32` - occurrences, 0 if absent
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        *self.token_count.get(token).unwrap_or(&0)
    }

    /// Sum of all token counts
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// Distinct tokens in first-appearance order
    ///
    /// # Returns
    /// * `Vec<&str>` - token set
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }

    /// (token, count) pairs in first-appearance order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Top `n` tokens by count (descending)
    /// Ties keep first-appearance order since the sort is stable
    ///
    /// # Arguments
    /// * `n` - maximum number of tokens
    ///
    /// # Returns
    /// * `Vec<(&str, u32)>` - tokens with counts
    #[inline]
    pub fn most_frequent(&self, n: usize) -> Vec<(&str, u32)> {
        let mut token_list: Vec<(&str, u32)> = self.iter().collect();
        token_list.sort_by(|a, b| b.1.cmp(&a.1));
        token_list.truncate(n);
        token_list
    }
}
