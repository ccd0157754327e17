// src/cache/movie_cache.rs
//
// Local movie cache: the two record shapes plus favorite merging.
//
// Favorite precedence when a flag has to be chosen:
//   first summary row for the id  >  stored detail row  >  incoming value
//
// Persistence failures are returned, never swallowed.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::{MovieDetail, MovieSummary};
use crate::error::AppResult;
use crate::store::{FieldUpdate, MovieDetailStore, MovieFilter, MovieSummaryStore};

#[cfg_attr(test, mockall::automock)]
pub trait MovieLocalCache: Send + Sync {
    /// Summary rows cached for `page`, oldest first. Empty means a miss.
    fn get_page(&self, page: u32) -> AppResult<Vec<MovieSummary>>;

    /// Stamp `items` with `page` and the current time and store them atomically.
    fn insert_page(&self, items: &[MovieSummary], page: u32) -> AppResult<()>;

    /// Detail row for `id` with the favorite flag merged in.
    fn get_detail(&self, id: i64) -> AppResult<Option<MovieDetail>>;

    /// Insert or overwrite the single detail row for `item.id`.
    fn upsert_detail(&self, item: &MovieDetail) -> AppResult<()>;

    /// Favorite flag for `id` by the precedence above, `None` if nothing is cached.
    fn favorite_flag(&self, id: i64) -> AppResult<Option<bool>>;

    /// Set the favorite flag on every record shape that knows `id`.
    /// Returns false only when neither shape had a row.
    fn set_favorite(&self, id: i64, value: bool) -> AppResult<bool>;

    /// Drop every cached row.
    fn clear(&self) -> AppResult<()>;

    fn stats(&self) -> AppResult<CacheStats>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub summary_rows: usize,
    pub detail_rows: usize,
    pub favorite_summary_rows: usize,
    pub favorite_detail_rows: usize,
}

/// `MovieLocalCache` over the record stores.
pub struct StoreMovieCache {
    summaries: Arc<dyn MovieSummaryStore>,
    details: Arc<dyn MovieDetailStore>,
}

impl StoreMovieCache {
    pub fn new(summaries: Arc<dyn MovieSummaryStore>, details: Arc<dyn MovieDetailStore>) -> Self {
        Self { summaries, details }
    }

    fn first_summary_favorite(&self, id: i64) -> AppResult<Option<bool>> {
        Ok(self
            .summaries
            .fetch_all(&MovieFilter::by_id(id))?
            .first()
            .map(|m| m.is_favorite))
    }

    fn stored_detail(&self, id: i64) -> AppResult<Option<MovieDetail>> {
        Ok(self.details.fetch_all(&MovieFilter::by_id(id))?.into_iter().next())
    }

    fn favorite_ids_in_summaries(&self) -> AppResult<HashSet<i64>> {
        Ok(self
            .summaries
            .fetch_all(&MovieFilter::favorites())?
            .into_iter()
            .map(|m| m.id)
            .collect())
    }

    fn favorite_ids_in_details(&self) -> AppResult<HashSet<i64>> {
        Ok(self
            .details
            .fetch_all(&MovieFilter::favorites())?
            .into_iter()
            .map(|d| d.id)
            .collect())
    }
}

impl MovieLocalCache for StoreMovieCache {
    fn get_page(&self, page: u32) -> AppResult<Vec<MovieSummary>> {
        self.summaries.fetch_all(&MovieFilter::by_page(page))
    }

    fn insert_page(&self, items: &[MovieSummary], page: u32) -> AppResult<()> {
        let now = Utc::now();

        // A movie already favorited elsewhere stays favorited on new pages
        let favorite_summaries = self.favorite_ids_in_summaries()?;
        let favorite_details = self.favorite_ids_in_details()?;

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let mut row = item.stamped(page, now);
            row.is_favorite = if favorite_summaries.contains(&item.id) {
                true
            } else if favorite_details.contains(&item.id) {
                // A non-favorite summary row outranks the detail flag
                self.first_summary_favorite(item.id)?.is_none()
            } else {
                false
            };
            rows.push(row);
        }

        self.summaries.save_all(&rows).map_err(|e| {
            log::error!("failed to cache page {} ({} items): {}", page, rows.len(), e);
            e
        })?;

        log::debug!("cached {} movies for page {}", rows.len(), page);
        Ok(())
    }

    fn get_detail(&self, id: i64) -> AppResult<Option<MovieDetail>> {
        let Some(mut detail) = self.stored_detail(id)? else {
            return Ok(None);
        };

        if let Some(flag) = self.first_summary_favorite(id)? {
            detail.is_favorite = flag;
        }

        Ok(Some(detail))
    }

    fn upsert_detail(&self, item: &MovieDetail) -> AppResult<()> {
        let mut row = item.clone();

        row.is_favorite = match self.first_summary_favorite(item.id)? {
            Some(flag) => flag,
            None => self
                .stored_detail(item.id)?
                .map(|existing| existing.is_favorite)
                .unwrap_or(item.is_favorite),
        };

        self.details.save(&row).map_err(|e| {
            log::error!("failed to cache detail for movie {}: {}", item.id, e);
            e
        })
    }

    fn favorite_flag(&self, id: i64) -> AppResult<Option<bool>> {
        if let Some(flag) = self.first_summary_favorite(id)? {
            return Ok(Some(flag));
        }
        Ok(self.stored_detail(id)?.map(|d| d.is_favorite))
    }

    fn set_favorite(&self, id: i64, value: bool) -> AppResult<bool> {
        let filter = MovieFilter::by_id(id);
        let updates = [FieldUpdate::IsFavorite(value)];

        let detail_updated = self.details.update_where(&filter, &updates)?;
        let summary_updated = self.summaries.update_where(&filter, &updates)?;

        log::debug!(
            "favorite={} for movie {} (detail: {}, summary: {})",
            value,
            id,
            detail_updated,
            summary_updated
        );

        Ok(detail_updated || summary_updated)
    }

    fn clear(&self) -> AppResult<()> {
        let summaries = self.summaries.delete_where(&MovieFilter::all())?;
        let details = self.details.delete_where(&MovieFilter::all())?;
        log::info!("cleared {} summary rows and {} detail rows", summaries, details);
        Ok(())
    }

    fn stats(&self) -> AppResult<CacheStats> {
        Ok(CacheStats {
            summary_rows: self.summaries.count(&MovieFilter::all())?,
            detail_rows: self.details.count(&MovieFilter::all())?,
            favorite_summary_rows: self.summaries.count(&MovieFilter::favorites())?,
            favorite_detail_rows: self.details.count(&MovieFilter::favorites())?,
        })
    }
}
