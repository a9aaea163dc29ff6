use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TokenFrequency;

/// keep document count and per-term document frequency
/// term insertion order defines the vector dimension of each term
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    /// number of documents added
    pub doc_num: u64,
    /// term -> number of documents containing it
    #[serde(with = "indexmap::map::serde_seq")]
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl Vocabulary {
    /// Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document's distinct terms
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            self.term_counts
                .entry(term.as_ref().into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Add a document from its token frequency
    pub fn add_doc(&mut self, freq: &TokenFrequency) {
        self.add_set(&freq.token_set_ref_str());
    }

    /// Get the number of documents
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `term`
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Dimension index of `term`
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.term_counts.get_index_of(term)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_frequency_counts_each_doc_once() {
        let mut vocab = Vocabulary::new();
        let mut a = TokenFrequency::new();
        a.add_tokens(&["cat", "cat", "dog"]);
        let mut b = TokenFrequency::new();
        b.add_tokens(&["dog"]);
        vocab.add_doc(&a);
        vocab.add_doc(&b);
        assert_eq!(vocab.get_doc_num(), 2);
        assert_eq!(vocab.get_term_count("cat"), 1);
        assert_eq!(vocab.get_term_count("dog"), 2);
        assert_eq!(vocab.get_term_count("bird"), 0);
        assert_eq!(vocab.index_of("dog"), Some(1));
        assert_eq!(vocab.vocab_size(), 2);
    }
}
