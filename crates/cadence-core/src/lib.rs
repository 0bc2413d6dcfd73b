//! Core domain model for cadence.
//!
//! This crate defines the song catalog model, the recommendation set handed
//! back to callers, the mood/activity/time-of-day taxonomy used to build
//! query contexts, catalog loading, and configuration.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod taxonomy;

pub use catalog::{load_catalog, Catalog, CatalogFormat};
pub use config::Config;
pub use error::{Error, Result};
