//! Sparse term-weight vectors.

/// A sparse vector over a vocabulary's term space.
///
/// Non-zero weights are stored as `(term index, weight)` pairs sorted by
/// index. The dimension always equals the size of the vocabulary that
/// produced the vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeightVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl TermWeightVector {
    /// The all-zero vector of the given dimension.
    #[must_use]
    pub fn zero(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Build a vector from `(index, weight)` pairs.
    ///
    /// Pairs are sorted by index; zero weights and indices outside the
    /// dimension are dropped, and repeated indices are summed.
    #[must_use]
    pub fn from_weights(dimension: usize, weights: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut pairs: Vec<(usize, f64)> = weights
            .into_iter()
            .filter(|&(index, weight)| index < dimension && weight != 0.0)
            .collect();
        pairs.sort_unstable_by_key(|&(index, _)| index);

        let mut entries: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (index, weight) in pairs {
            match entries.last_mut() {
                Some(last) if last.0 == index => last.1 += weight,
                _ => entries.push((index, weight)),
            }
        }

        Self { dimension, entries }
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of non-zero weights.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at `index`, zero if the term is absent.
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit length. A zero vector stays zero.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }

    /// Dot product, walking both sorted index lists in step.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut a, mut b) = (self.entries.iter().peekable(), other.entries.iter().peekable());
        let mut sum = 0.0;
        while let (Some(&&(i, x)), Some(&&(j, y))) = (a.peek(), b.peek()) {
            match i.cmp(&j) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += x * y;
                    a.next();
                    b.next();
                }
            }
        }
        sum
    }

    /// Cosine similarity, 0.0 when either vector is zero.
    ///
    /// Weights are non-negative, so the result lies in [0, 1].
    #[must_use]
    pub fn cosine(&self, other: &Self) -> f64 {
        let denominator = self.norm() * other.norm();
        if denominator == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denominator).clamp(0.0, 1.0)
    }
}
