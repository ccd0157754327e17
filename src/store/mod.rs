// src/store/mod.rs
//
// Persistent store for the two cached record shapes.
//
// RULES:
// - Stores are DUMB data mappers
// - NO favorite-merge or fallback policy (that lives in the cache)
// - Typed filters only, values always bound as parameters

pub mod filter;
pub mod movie_detail_store;
pub mod movie_summary_store;

pub use filter::{FieldUpdate, MovieFilter};
pub use movie_detail_store::{MovieDetailStore, SqliteMovieDetailStore};
pub use movie_summary_store::{MovieSummaryStore, SqliteMovieSummaryStore};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;

/// Fixed-width RFC 3339, so text order is time order.
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(column: usize, text: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}
