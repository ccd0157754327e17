// src/repositories/movie_repository.rs
//
// Offline-first movie repository.
//
// Read path:  local cache first, remote on miss, write-through on success.
// Failure:    network errors degrade to the cache (or an empty value) and are
//             logged at warn. Only cache read failures reach the caller.
//
// Pagination state is atomic so one repository can be shared behind Arc.
// It only changes after a list fetch has completed.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use crate::cache::MovieLocalCache;
use crate::domain::{MovieDetail, MovieSummary};
use crate::error::AppResult;
use crate::integrations::MovieRemoteSource;

pub struct MovieRepository {
    cache: Arc<dyn MovieLocalCache>,
    remote: Arc<dyn MovieRemoteSource>,
    has_more_pages: AtomicBool,
    current_page: AtomicU32,
}

impl MovieRepository {
    pub fn new(cache: Arc<dyn MovieLocalCache>, remote: Arc<dyn MovieRemoteSource>) -> Self {
        Self {
            cache,
            remote,
            has_more_pages: AtomicBool::new(true),
            current_page: AtomicU32::new(1),
        }
    }

    /// Next page the infinite scroll should ask for.
    pub fn current_page(&self) -> u32 {
        self.current_page.load(Ordering::Acquire)
    }

    /// False once the remote returned an empty page. Never resets.
    pub fn has_more_pages(&self) -> bool {
        self.has_more_pages.load(Ordering::Acquire)
    }

    /// Movies for `page`, cache first.
    pub async fn get_movies_list(&self, page: u32) -> AppResult<Vec<MovieSummary>> {
        let local = self.cache.get_page(page)?;
        if !local.is_empty() {
            log::debug!("page {} served from cache ({} movies)", page, local.len());
            self.advance_cursor(page);
            return Ok(local);
        }

        if !self.has_more_pages() {
            log::debug!("page {} skipped, remote exhausted", page);
            return Ok(Vec::new());
        }

        let fetched = match self.remote.fetch_movies_page(page).await {
            Ok(movies) => movies,
            Err(e) => {
                log::warn!("fetching page {} failed, using cache: {}", page, e);
                return self.cache.get_page(page);
            }
        };

        if fetched.is_empty() {
            log::info!("remote returned no movies for page {}, no more pages", page);
            self.has_more_pages.store(false, Ordering::Release);
            return Ok(Vec::new());
        }

        self.advance_cursor(page);

        if let Err(e) = self.cache.insert_page(&fetched, page) {
            log::error!("write-through for page {} failed: {}", page, e);
            return Ok(fetched);
        }

        let cached = self.cache.get_page(page)?;
        if cached.is_empty() {
            return Ok(fetched);
        }
        Ok(cached)
    }

    /// `get_movies_list(current_page())`
    pub async fn get_next_movies_page(&self) -> AppResult<Vec<MovieSummary>> {
        self.get_movies_list(self.current_page()).await
    }

    /// Detail for `id`, cache first. An unknown movie yields `MovieDetail::default()`.
    pub async fn get_movie_detail(&self, id: i64) -> AppResult<MovieDetail> {
        if let Some(detail) = self.cache.get_detail(id)? {
            log::debug!("detail {} served from cache", id);
            return Ok(detail);
        }

        match self.remote.fetch_movie_detail(id).await {
            Ok(mut remote) => {
                if let Err(e) = self.cache.upsert_detail(&remote) {
                    log::error!("write-through for detail {} failed: {}", id, e);
                    // Best effort; the fetched detail is returned either way
                    match self.cache.favorite_flag(id) {
                        Ok(Some(flag)) => remote.is_favorite = flag,
                        Ok(None) => {}
                        Err(e) => log::warn!("favorite lookup for {} failed: {}", id, e),
                    }
                    return Ok(remote);
                }
                Ok(self.cache.get_detail(id)?.unwrap_or_default())
            }
            Err(e) => {
                log::warn!("fetching detail {} failed, using cache: {}", id, e);
                Ok(self.cache.get_detail(id)?.unwrap_or_default())
            }
        }
    }

    /// Local only. Returns whether any cached record was updated.
    pub fn update_favorite(&self, id: i64, value: bool) -> AppResult<bool> {
        self.cache.set_favorite(id, value)
    }

    fn advance_cursor(&self, page: u32) {
        self.current_page
            .fetch_max(page.saturating_add(1), Ordering::AcqRel);
    }
}
