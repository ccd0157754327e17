use super::entity::{MovieDetail, MovieSummary};
use crate::domain::{DomainError, DomainResult};

/// Validates a list item before it is cached
pub fn validate_movie_summary(movie: &MovieSummary) -> DomainResult<()> {
    validate_id(movie.id)?;

    if movie.page == 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie {} has page 0; pages start at 1",
            movie.id
        )));
    }

    if !movie.vote_average.is_finite() {
        return Err(DomainError::InvariantViolation(format!(
            "Movie {} has a non-finite vote average",
            movie.id
        )));
    }

    Ok(())
}

/// Validates a detail record before it is cached
pub fn validate_movie_detail(detail: &MovieDetail) -> DomainResult<()> {
    validate_id(detail.id)
}

fn validate_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Movie id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

/// Invariants that must hold for cached movies:
///
/// 1. Identity comes from upstream and is positive
/// 2. Summaries belong to a page >= 1
/// 3. The favorite flag is client-local and never sent upstream
/// 4. Summary rows are keyed by (id, page), detail rows by id
