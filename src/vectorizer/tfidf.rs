use num::{Float, NumCast};
use serde::{Deserialize, Serialize};

use crate::vectorizer::{token::TokenFrequency, vocab::Vocabulary};

/// Sparse TF-IDF vector
/// entries are `(dimension, weight)` sorted by dimension, zero weights omitted
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TFIDFVector<N> {
    pub entries: Vec<(usize, N)>,
}

impl<N> TFIDFVector<N>
where
    N: Float,
{
    /// iterate `(dimension, weight)` in dimension order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.entries.iter().copied()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// L2 norm
    pub fn norm(&self) -> N {
        self.entries
            .iter()
            .fold(N::zero(), |acc, &(_, v)| acc + v * v)
            .sqrt()
    }
}

pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Build the IDF vector
    /// # Arguments
    /// * `vocab` - vocabulary with document frequencies
    /// # Returns
    /// * `Vec<N>` - IDF per vocabulary dimension
    fn idf_vec(vocab: &Vocabulary) -> Vec<N>;
    /// Build a TF-IDF vector for one document
    /// # Arguments
    /// * `freq` - token frequency of the document
    /// * `vocab` - shared vocabulary
    /// * `idf_vec` - IDF vector from [`TFIDFEngine::idf_vec`]
    /// # Returns
    /// * `TFIDFVector<N>` - sparse vector; tokens outside the vocabulary are ignored
    fn tfidf_vec(freq: &TokenFrequency, vocab: &Vocabulary, idf_vec: &[N]) -> TFIDFVector<N>;
}

/// Default TF-IDF engine
/// raw counts, smoothed IDF `ln((1 + n) / (1 + df)) + 1`, L2-normalized rows
/// Supports `f32` and `f64`
#[derive(Debug, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF
    ///
    /// # Arguments
    /// * `doc_num` - number of documents
    /// * `doc_freq` - documents containing the term
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

#[inline]
fn cast<N: NumCast + Float>(v: f64) -> N {
    <N as NumCast>::from(v).unwrap_or_else(N::zero)
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(vocab: &Vocabulary) -> Vec<N> {
        let doc_num = vocab.get_doc_num();
        vocab
            .term_counts
            .values()
            .map(|&doc_freq| cast(Self::idf_calc(doc_num, doc_freq)))
            .collect()
    }

    fn tfidf_vec(freq: &TokenFrequency, vocab: &Vocabulary, idf_vec: &[N]) -> TFIDFVector<N> {
        let mut entries: Vec<(usize, N)> = freq
            .iter()
            .filter_map(|(token, count)| {
                let idx = vocab.index_of(token)?;
                let idf = *idf_vec.get(idx)?;
                Some((idx, cast::<N>(count as f64) * idf))
            })
            .filter(|(_, v)| !v.is_zero())
            .collect();
        entries.sort_unstable_by_key(|(idx, _)| *idx);

        let mut vec = TFIDFVector { entries };
        let norm = vec.norm();
        if norm > N::zero() {
            for (_, v) in vec.entries.iter_mut() {
                *v = *v / norm;
            }
        }
        vec
    }
}
