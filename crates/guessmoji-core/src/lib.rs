//! GuessMoji Core Engine
//!
//! The computational kernel for GuessMoji, designed to run identically in
//! the browser (WASM) and on a server (native).
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (parallel)
//! - `parallel` - Parallel scoring via rayon for large catalogs
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use guessmoji_core::similarity::similarity_filter;
//!
//! let titles = ["apple", "application", "apricot", "banana", "grape"];
//! let matches = similarity_filter("apply", &titles, 0.35);
//! assert_eq!(matches, vec!["apple", "application"]);
//! ```

pub mod catalog;
pub mod clues;
pub mod config;
pub mod similarity;

// Re-export main types at crate root
pub use catalog::{Catalog, CatalogError, Movie};
pub use clues::{BoardSnapshot, ClueBoard, ClueError, GuessOutcome, Hint, RevealSchedule, Stage};
pub use config::{FilterConfig, DEFAULT_THRESHOLD};
pub use similarity::{
    edit_distance, similarity, similarity_filter, similarity_from_distance, str_distance,
    CodeUnit, ScoredMatch, SimilarityFilter,
};
