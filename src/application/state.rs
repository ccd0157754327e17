// src/application/state.rs

use std::sync::Arc;

use crate::cache::{MovieLocalCache, StoreMovieCache};
use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;
use crate::integrations::{MovieRemoteSource, TmdbClient};
use crate::repositories::MovieRepository;
use crate::services::{MovieDetailsUseCase, MoviesUseCase};
use crate::store::{MovieDetailStore, MovieSummaryStore, SqliteMovieDetailStore, SqliteMovieSummaryStore};

/// Everything the front end needs, built once at startup.
/// All fields are Arc-wrapped for sharing across tasks.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub cache: Arc<dyn MovieLocalCache>,
    pub repository: Arc<MovieRepository>,
    pub movies: Arc<MoviesUseCase>,
    pub movie_details: Arc<MovieDetailsUseCase>,
}

impl AppState {
    /// Open the database, apply the schema and wire the object graph.
    pub fn build(config: &AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let pool = Arc::new(create_connection_pool(&config.db_path, config.pool_size)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        let token = config.api_token.clone().unwrap_or_else(|| {
            log::warn!("TMDB_API_TOKEN is not set, only cached movies are available");
            String::new()
        });
        let remote: Arc<dyn MovieRemoteSource> =
            Arc::new(TmdbClient::new(&config.base_url, token, config.http_timeout)?);

        // 2. STORES AND CACHE
        let summaries: Arc<dyn MovieSummaryStore> =
            Arc::new(SqliteMovieSummaryStore::new(pool.clone()));
        let details: Arc<dyn MovieDetailStore> = Arc::new(SqliteMovieDetailStore::new(pool.clone()));
        let cache: Arc<dyn MovieLocalCache> = Arc::new(StoreMovieCache::new(summaries, details));

        // 3. REPOSITORY AND USE CASES
        Ok(Self::with_parts(pool, cache, remote))
    }

    /// Wire the upper layers over an existing pool, cache and remote source.
    pub fn with_parts(
        pool: Arc<ConnectionPool>,
        cache: Arc<dyn MovieLocalCache>,
        remote: Arc<dyn MovieRemoteSource>,
    ) -> Self {
        let repository = Arc::new(MovieRepository::new(cache.clone(), remote));
        let movies = Arc::new(MoviesUseCase::new(repository.clone()));
        let movie_details = Arc::new(MovieDetailsUseCase::new(repository.clone()));

        Self {
            pool,
            cache,
            repository,
            movies,
            movie_details,
        }
    }
}
