// src/store/movie_detail_store.rs
//
// Detail persistence, one row per movie_id. Genres are stored as JSON.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Row};

use crate::db::ConnectionPool;
use crate::domain::{validate_movie_detail, Genre, MovieDetail};
use crate::error::AppResult;
use crate::store::filter::{to_set_clause, FieldUpdate, MovieFilter};
use crate::store::format_timestamp;

#[cfg_attr(test, mockall::automock)]
pub trait MovieDetailStore: Send + Sync {
    /// Insert, or overwrite every field of the existing row for the id.
    fn save(&self, detail: &MovieDetail) -> AppResult<()>;
    fn fetch_all(&self, filter: &MovieFilter) -> AppResult<Vec<MovieDetail>>;
    fn update_where(&self, filter: &MovieFilter, updates: &[FieldUpdate]) -> AppResult<bool>;
    fn delete_where(&self, filter: &MovieFilter) -> AppResult<usize>;
    fn count(&self, filter: &MovieFilter) -> AppResult<usize>;
}

pub struct SqliteMovieDetailStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieDetailStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_detail(row: &Row) -> Result<MovieDetail, rusqlite::Error> {
        let genres_json: String = row.get("genres")?;
        let genres: Vec<Genre> = serde_json::from_str(&genres_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        Ok(MovieDetail {
            id: row.get("movie_id")?,
            title: row.get("title")?,
            genres,
            overview: row.get("overview")?,
            poster_path: row.get("poster_path")?,
            release_date: row.get("release_date")?,
            vote_average: row.get("vote_average")?,
            runtime: row.get("runtime")?,
            is_favorite: row.get("is_favorite")?,
        })
    }
}

impl MovieDetailStore for SqliteMovieDetailStore {
    fn save(&self, detail: &MovieDetail) -> AppResult<()> {
        validate_movie_detail(detail)?;

        let conn = self.pool.get()?;
        let genres_json = serde_json::to_string(&detail.genres)?;
        let now = format_timestamp(&Utc::now());

        conn.execute(
            "INSERT INTO movie_details (
                movie_id, title, genres, overview, poster_path, release_date,
                vote_average, runtime, is_favorite, created_at, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)
             ON CONFLICT (movie_id) DO UPDATE SET
                title = excluded.title,
                genres = excluded.genres,
                overview = excluded.overview,
                poster_path = excluded.poster_path,
                release_date = excluded.release_date,
                vote_average = excluded.vote_average,
                runtime = excluded.runtime,
                is_favorite = excluded.is_favorite,
                updated_at = excluded.updated_at",
            params![
                detail.id,
                detail.title,
                genres_json,
                detail.overview,
                detail.poster_path,
                detail.release_date,
                detail.vote_average,
                detail.runtime,
                detail.is_favorite,
                now,
            ],
        )?;

        Ok(())
    }

    fn fetch_all(&self, filter: &MovieFilter) -> AppResult<Vec<MovieDetail>> {
        let conn = self.pool.get()?;
        let (where_sql, values) = filter.to_where_clause(None)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT movie_id, title, genres, overview, poster_path, release_date,
                    vote_average, runtime, is_favorite
             FROM movie_details
             WHERE {}
             ORDER BY created_at ASC, movie_id ASC",
            where_sql
        ))?;

        let details = stmt
            .query_map(params_from_iter(values.iter()), Self::row_to_detail)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(details)
    }

    fn update_where(&self, filter: &MovieFilter, updates: &[FieldUpdate]) -> AppResult<bool> {
        if updates.is_empty() {
            return Ok(false);
        }

        let conn = self.pool.get()?;
        let (set_sql, mut values) = to_set_clause(updates);
        values.push(Value::Text(format_timestamp(&Utc::now())));
        let (where_sql, where_values) = filter.to_where_clause(None)?;
        values.extend(where_values);

        let rows_affected = conn.execute(
            &format!(
                "UPDATE movie_details SET {}, updated_at = ? WHERE {}",
                set_sql, where_sql
            ),
            params_from_iter(values.iter()),
        )?;

        Ok(rows_affected > 0)
    }

    fn delete_where(&self, filter: &MovieFilter) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let (where_sql, values) = filter.to_where_clause(None)?;

        let rows_affected = conn.execute(
            &format!("DELETE FROM movie_details WHERE {}", where_sql),
            params_from_iter(values.iter()),
        )?;

        Ok(rows_affected)
    }

    fn count(&self, filter: &MovieFilter) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let (where_sql, values) = filter.to_where_clause(None)?;

        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM movie_details WHERE {}", where_sql),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )?;

        Ok(count as usize)
    }
}
