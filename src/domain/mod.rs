// src/domain/mod.rs
//
// Domain Root
//
// Declares the domain modules and re-exports their public API.
// Other modules import from `crate::domain::*`.

pub mod movie;

pub use movie::{
    validate_movie_detail, validate_movie_summary, Genre, MovieDetail, MovieSummary,
    POSTER_BASE_URL,
};

use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
