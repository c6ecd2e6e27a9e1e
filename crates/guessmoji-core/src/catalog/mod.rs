//! Movie Catalog
//!
//! The ordered set of known movies, loaded once per game session. Its titles
//! are the candidate set for guess suggestions, in catalog order.
//!
//! # Example
//!
//! ```rust
//! use guessmoji_core::{Catalog, FilterConfig};
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"id":"1","movieName":"Alien"},{"id":"2","movieName":"Aliens"},{"id":"3","movieName":"Heat"}]"#,
//! ).unwrap();
//!
//! let hits = catalog.suggest("Alien", &FilterConfig::with_threshold(0.8));
//! assert_eq!(hits.len(), 2);
//! ```

mod error;
mod types;

pub use error::{CatalogError, CatalogResult};
pub use types::Movie;

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use ahash::AHasher;

use crate::config::FilterConfig;
use crate::similarity::SimilarityFilter;

/// Immutable, ordered movie catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    fingerprint: String,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank titles
    pub fn new(movies: Vec<Movie>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if movie.movie_name.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(movie.id.clone()));
            }
            if !seen.insert(movie.id.as_str()) {
                return Err(CatalogError::DuplicateId(movie.id.clone()));
            }
        }

        let fingerprint = compute_fingerprint(&movies);
        tracing::debug!(movies = movies.len(), %fingerprint, "catalog loaded");

        Ok(Self {
            movies,
            fingerprint,
        })
    }

    /// Parse a JSON array of `movies` table rows
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let movies: Vec<Movie> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(movies)
    }

    /// Candidate set for suggestions, in catalog order
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.movie_name.as_str()).collect()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Hash of the titles, for detecting catalog changes.
    ///
    /// Hash keys are fixed at compile time, so values are only comparable
    /// between runs of the same build.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Movies whose title is similar enough to `query`, in catalog order
    pub fn suggest(&self, query: &str, config: &FilterConfig) -> Vec<&Movie> {
        let titles = self.titles();
        SimilarityFilter::new(config.clone())
            .scored(query, &titles)
            .into_iter()
            .map(|m| &self.movies[m.index])
            .collect()
    }
}

fn compute_fingerprint(movies: &[Movie]) -> String {
    let mut hasher = AHasher::default();
    for m in movies {
        m.movie_name.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}
