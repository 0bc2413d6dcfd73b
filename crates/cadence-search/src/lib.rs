//! Context-similarity search for cadence.
//!
//! Builds a TF-IDF vector space over the catalog's context strings and ranks
//! songs against a listener's context by cosine similarity.
//!
//! ```
//! use cadence_core::model::CatalogEntry;
//! use cadence_search::ContextMatcher;
//!
//! let matcher = ContextMatcher::new();
//! matcher
//!     .fit(vec![
//!         CatalogEntry::new("1", "Happy", "Pharrell Williams").with_context("happy active"),
//!         CatalogEntry::new("2", "Hurt", "Johnny Cash").with_context("sad relaxed"),
//!     ])
//!     .unwrap();
//!
//! let set = matcher.recommend("Happy Exercising Morning", 1).unwrap();
//! assert_eq!(set.items[0].name, "Happy");
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod indexer;
pub mod matcher;
pub mod tokenize;
pub mod vector;
pub mod vocabulary;

pub use error::{RecommendError, Result};
pub use indexer::{CatalogIndexer, FittedIndex};
pub use matcher::{ContextMatcher, ScoredEntry};
pub use tokenize::Tokenizer;
pub use vector::TermWeightVector;
pub use vocabulary::VocabularyModel;
