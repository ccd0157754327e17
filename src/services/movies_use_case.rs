// src/services/movies_use_case.rs
use crate::domain::MovieSummary;
use crate::error::AppResult;
use crate::repositories::MovieRepository;
use std::sync::Arc;

/// Entry points of the movie list screen.
pub struct MoviesUseCase {
    repository: Arc<MovieRepository>,
}

impl MoviesUseCase {
    pub fn new(repository: Arc<MovieRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_movies_list(&self, page: u32) -> AppResult<Vec<MovieSummary>> {
        self.repository.get_movies_list(page).await
    }

    /// Loads the page after the last one that produced movies.
    pub async fn get_next_page(&self) -> AppResult<Vec<MovieSummary>> {
        self.repository.get_next_movies_page().await
    }

    pub fn has_more_pages(&self) -> bool {
        self.repository.has_more_pages()
    }

    pub fn update_favorite(&self, id: i64, value: bool) -> AppResult<bool> {
        self.repository.update_favorite(id, value)
    }
}
