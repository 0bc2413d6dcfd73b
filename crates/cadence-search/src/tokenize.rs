//! Context string tokenization.

/// Splits context strings into lowercase terms.
///
/// A term is a run of alphanumeric characters or underscores with at least
/// `min_chars` characters; everything else separates terms. The same
/// tokenizer must be used at fit time and at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self { min_chars: 2 }
    }
}

impl Tokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum term length in characters. Zero is treated as one.
    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars.max(1);
        self
    }

    #[must_use]
    pub const fn min_chars(&self) -> usize {
        self.min_chars
    }

    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|term| term.chars().count() >= self.min_chars)
            .map(str::to_owned)
            .collect()
    }
}
