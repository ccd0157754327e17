// src/services/movie_details_use_case.rs
use crate::domain::MovieDetail;
use crate::error::AppResult;
use crate::repositories::MovieRepository;
use std::sync::Arc;

/// Entry points of the movie detail screen.
pub struct MovieDetailsUseCase {
    repository: Arc<MovieRepository>,
}

impl MovieDetailsUseCase {
    pub fn new(repository: Arc<MovieRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_movie_detail(&self, id: i64) -> AppResult<MovieDetail> {
        self.repository.get_movie_detail(id).await
    }

    pub fn update_favorite(&self, id: i64, value: bool) -> AppResult<bool> {
        self.repository.update_favorite(id, value)
    }

    /// Flip the favorite flag of `current`.
    ///
    /// The returned detail carries the new flag only if a cached record was
    /// updated; otherwise `current` comes back unchanged.
    pub fn toggle_favorite(&self, current: &MovieDetail) -> AppResult<MovieDetail> {
        let value = !current.is_favorite;
        let mut detail = current.clone();

        if self.repository.update_favorite(current.id, value)? {
            detail.is_favorite = value;
        } else {
            log::debug!("movie {} is not cached, favorite unchanged", current.id);
        }

        Ok(detail)
    }
}
