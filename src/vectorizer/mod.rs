pub mod compare;
pub mod similarity;
pub mod stop_words;
pub mod tfidf;
pub mod token;
pub mod vocab;

use std::collections::HashSet;
use std::marker::PhantomData;

use num::Float;

use crate::vectorizer::{
    compare::{Compare, DefaultCompare},
    stop_words::ENGLISH_STOP_WORDS,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine, TFIDFVector},
    token::{vocab_tokens, TokenFrequency},
    vocab::Vocabulary,
};

pub use similarity::{compute_similarities, max_score, SimilarityResult};

/// TF-IDF vectorizer over a small, fixed document set.
///
/// Documents are tokenized with [`vocab_tokens`], stop words from
/// [`ENGLISH_STOP_WORDS`] are dropped, and every document added with
/// [`TFIDFVectorizer::fit`] contributes to one shared vocabulary.
///
/// `TFIDFVectorizer<N, E, C>` has the following generic parameters:
/// - `N`: vector parameter type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine (e.g. `DefaultTFIDFEngine`)
/// - `C`: vector comparison (e.g. `DefaultCompare`)
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine, C = DefaultCompare>
where
    N: Float,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    /// shared vocabulary with document frequencies
    pub vocab: Vocabulary,
    /// IDF Vector, one entry per vocabulary dimension
    pub idf_cache: Vec<N>,
    stop_words: HashSet<&'static str>,
    _marker: PhantomData<(E, C)>,
}

impl<N, E, C> Default for TFIDFVectorizer<N, E, C>
where
    N: Float,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, C> TFIDFVectorizer<N, E, C>
where
    N: Float,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    /// Create an empty vectorizer with the English stop-word list
    pub fn new() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS)
    }

    /// Create an empty vectorizer with a custom stop-word list
    pub fn with_stop_words(stop_words: &[&'static str]) -> Self {
        Self {
            vocab: Vocabulary::new(),
            idf_cache: Vec::new(),
            stop_words: stop_words.iter().copied().collect(),
            _marker: PhantomData,
        }
    }

    /// Token frequency of `text` with stop words removed
    pub fn token_frequency(&self, text: &str) -> TokenFrequency {
        let tokens = vocab_tokens(text);
        let mut freq = TokenFrequency::new();
        freq.add_tokens_filtered(&tokens, |tok| !self.stop_words.contains(tok));
        freq
    }

    /// Add documents to the vocabulary and recalculate IDF
    pub fn fit<'a, I>(&mut self, docs: I)
    where
        I: IntoIterator<Item = &'a TokenFrequency>,
    {
        for doc in docs {
            self.vocab.add_doc(doc);
        }
        self.re_calc_idf();
    }

    /// TF-IDF vector of a document against the fitted vocabulary
    pub fn transform(&self, freq: &TokenFrequency) -> TFIDFVector<N> {
        E::tfidf_vec(freq, &self.vocab, &self.idf_cache)
    }

    /// Cosine similarity of two vectors from [`TFIDFVectorizer::transform`]
    pub fn similarity(&self, a: &TFIDFVector<N>, b: &TFIDFVector<N>) -> f64 {
        C::cosine_similarity(a.raw_iter(), b.raw_iter())
    }

    pub fn doc_num(&self) -> u64 {
        self.vocab.get_doc_num()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.vocab_size()
    }

    /// Recompute the IDF cache from the vocabulary
    fn re_calc_idf(&mut self) {
        self.idf_cache = E::idf_vec(&self.vocab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_never_enter_vocabulary() {
        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::new();
        let a = vectorizer.token_frequency("The cat is on the mat");
        let b = vectorizer.token_frequency("A dog and the cat");
        vectorizer.fit([&a, &b]);
        assert_eq!(vectorizer.doc_num(), 2);
        for word in ["the", "is", "on", "and"] {
            assert!(vectorizer.vocab.index_of(word).is_none(), "{word} leaked");
        }
        assert_eq!(vectorizer.vocab_size(), 3);
        assert_eq!(vectorizer.idf_cache.len(), 3);
    }

    #[test]
    fn similarity_is_symmetric() {
        let mut vectorizer: TFIDFVectorizer<f32> = TFIDFVectorizer::new();
        let a = vectorizer.token_frequency("rust ownership borrowing lifetimes");
        let b = vectorizer.token_frequency("rust borrowing traits");
        vectorizer.fit([&a, &b]);
        let (va, vb) = (vectorizer.transform(&a), vectorizer.transform(&b));
        let ab = vectorizer.similarity(&va, &vb);
        let ba = vectorizer.similarity(&vb, &va);
        assert!((ab - ba).abs() < 1e-9);
        assert!(ab > 0.0 && ab < 1.0);
    }

    #[test]
    fn custom_stop_words_are_honored() {
        let mut vectorizer: TFIDFVectorizer = TFIDFVectorizer::with_stop_words(&["rust"]);
        let a = vectorizer.token_frequency("rust is the best");
        vectorizer.fit([&a]);
        assert!(vectorizer.vocab.index_of("rust").is_none());
        assert!(vectorizer.vocab.index_of("the").is_some());
    }
}
