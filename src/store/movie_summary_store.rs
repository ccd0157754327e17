// src/store/movie_summary_store.rs
//
// List-item persistence, one row per (movie_id, page).

use std::sync::Arc;

use rusqlite::{params, params_from_iter, Row};

use crate::db::ConnectionPool;
use crate::domain::{validate_movie_summary, MovieSummary};
use crate::error::AppResult;
use crate::store::filter::{to_set_clause, FieldUpdate, MovieFilter};
use crate::store::{format_timestamp, parse_timestamp};

#[cfg_attr(test, mockall::automock)]
pub trait MovieSummaryStore: Send + Sync {
    /// Save all rows in one transaction; nothing is written if any row fails.
    fn save_all(&self, movies: &[MovieSummary]) -> AppResult<()>;
    /// Matching rows, oldest first.
    fn fetch_all(&self, filter: &MovieFilter) -> AppResult<Vec<MovieSummary>>;
    /// True when at least one row matched.
    fn update_where(&self, filter: &MovieFilter, updates: &[FieldUpdate]) -> AppResult<bool>;
    fn delete_where(&self, filter: &MovieFilter) -> AppResult<usize>;
    fn count(&self, filter: &MovieFilter) -> AppResult<usize>;
}

pub struct SqliteMovieSummaryStore {
    pool: Arc<ConnectionPool>,
}

const SELECT_COLUMNS: &str = "SELECT movie_id, page, title, poster_path, release_date,
        vote_average, is_favorite, created_at
 FROM movie_summaries";

impl SqliteMovieSummaryStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_summary(row: &Row) -> Result<MovieSummary, rusqlite::Error> {
        let created_at: String = row.get("created_at")?;

        Ok(MovieSummary {
            id: row.get("movie_id")?,
            page: row.get("page")?,
            title: row.get("title")?,
            poster_path: row.get("poster_path")?,
            release_date: row.get("release_date")?,
            vote_average: row.get("vote_average")?,
            is_favorite: row.get("is_favorite")?,
            created_at: parse_timestamp(7, &created_at)?,
        })
    }
}

impl MovieSummaryStore for SqliteMovieSummaryStore {
    fn save_all(&self, movies: &[MovieSummary]) -> AppResult<()> {
        for movie in movies {
            validate_movie_summary(movie)?;
        }

        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        {
            // Existing (movie_id, page) rows keep their favorite flag and creation time
            let mut stmt = tx.prepare(
                "INSERT INTO movie_summaries (
                    movie_id, page, title, poster_path, release_date,
                    vote_average, is_favorite, created_at
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT (movie_id, page) DO UPDATE SET
                    title = excluded.title,
                    poster_path = excluded.poster_path,
                    release_date = excluded.release_date,
                    vote_average = excluded.vote_average",
            )?;

            for movie in movies {
                stmt.execute(params![
                    movie.id,
                    movie.page,
                    movie.title,
                    movie.poster_path,
                    movie.release_date,
                    movie.vote_average,
                    movie.is_favorite,
                    format_timestamp(&movie.created_at),
                ])?;
            }
        }
        tx.commit()?;

        Ok(())
    }

    fn fetch_all(&self, filter: &MovieFilter) -> AppResult<Vec<MovieSummary>> {
        let conn = self.pool.get()?;
        let (where_sql, values) = filter.to_where_clause(Some("page"))?;

        let mut stmt = conn.prepare(&format!(
            "{} WHERE {} ORDER BY created_at ASC, row_id ASC",
            SELECT_COLUMNS, where_sql
        ))?;

        let movies = stmt
            .query_map(params_from_iter(values.iter()), Self::row_to_summary)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn update_where(&self, filter: &MovieFilter, updates: &[FieldUpdate]) -> AppResult<bool> {
        if updates.is_empty() {
            return Ok(false);
        }

        let conn = self.pool.get()?;
        let (set_sql, mut values) = to_set_clause(updates);
        let (where_sql, where_values) = filter.to_where_clause(Some("page"))?;
        values.extend(where_values);

        let rows_affected = conn.execute(
            &format!("UPDATE movie_summaries SET {} WHERE {}", set_sql, where_sql),
            params_from_iter(values.iter()),
        )?;

        Ok(rows_affected > 0)
    }

    fn delete_where(&self, filter: &MovieFilter) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let (where_sql, values) = filter.to_where_clause(Some("page"))?;

        let rows_affected = conn.execute(
            &format!("DELETE FROM movie_summaries WHERE {}", where_sql),
            params_from_iter(values.iter()),
        )?;

        Ok(rows_affected)
    }

    fn count(&self, filter: &MovieFilter) -> AppResult<usize> {
        let conn = self.pool.get()?;
        let (where_sql, values) = filter.to_where_clause(Some("page"))?;

        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM movie_summaries WHERE {}", where_sql),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )?;

        Ok(count as usize)
    }
}
