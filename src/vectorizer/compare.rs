use std::cmp::Ordering;

use num::{Float, ToPrimitive};

pub trait Compare<N>
where
    N: Float,
{
    /// Cosine similarity over sparse `(dimension, value)` iterators sorted by dimension
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    /// a zero vector on either side gives 0.0
    fn cosine_similarity(vec: impl Iterator<Item = (usize, N)>, other: impl Iterator<Item = (usize, N)>) -> f64;
}

#[derive(Debug, Clone, Copy)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Float,
{
    #[inline]
    fn cosine_similarity(vec: impl Iterator<Item = (usize, N)>, other: impl Iterator<Item = (usize, N)>) -> f64 {
        let mut a_it = vec.fuse();
        let mut b_it = other.fuse();
        let mut a_next = a_it.next();
        let mut b_next = b_it.next();
        let mut norm_a = 0_f64;
        let mut norm_b = 0_f64;
        let mut dot = 0_f64;
        while let (Some((ia, va)), Some((ib, vb))) = (a_next, b_next) {
            let (fa, fb) = (to_f64(va), to_f64(vb));
            match ia.cmp(&ib) {
                Ordering::Equal => {
                    norm_a += fa * fa;
                    norm_b += fb * fb;
                    dot += fa * fb;
                    a_next = a_it.next();
                    b_next = b_it.next();
                }
                Ordering::Less => {
                    norm_a += fa * fa;
                    a_next = a_it.next();
                }
                Ordering::Greater => {
                    norm_b += fb * fb;
                    b_next = b_it.next();
                }
            }
        }
        while let Some((_, va)) = a_next { let fa = to_f64(va); norm_a += fa * fa; a_next = a_it.next(); }
        while let Some((_, vb)) = b_next { let fb = to_f64(vb); norm_b += fb * fb; b_next = b_it.next(); }
        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            // rounding can push identical vectors slightly past 1.0
            (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
        }
    }
}

#[inline(always)]
fn to_f64<N: ToPrimitive>(v: N) -> f64 {
    v.to_f64().unwrap_or(0.0)
}
