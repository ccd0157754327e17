// src/lib.rs
// MovieHub - Offline-first movie catalog core
//
// Architecture:
// - Local-first: every read is served from the SQLite cache when it can be
// - Write-through: remote results are stored before they are returned
// - Fail-soft: network failures degrade to cached or empty values
// - Explicit wiring: AppState builds the object graph, no globals

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod store;

// ============================================================================
// DATA LAYER
// ============================================================================

pub mod cache;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use application::AppState;
pub use cache::{CacheStats, MovieLocalCache, StoreMovieCache};
pub use config::AppConfig;
pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use domain::{Genre, MovieDetail, MovieSummary};
pub use error::{AppError, AppResult, NetworkError};
pub use integrations::{MovieRemoteSource, TmdbClient};
pub use repositories::MovieRepository;
pub use services::{MovieDetailsUseCase, MoviesUseCase};
pub use store::{FieldUpdate, MovieFilter};
