// src/integrations/remote_source.rs
//
// Boundary the movie repository consumes for upstream data.

use async_trait::async_trait;

use crate::domain::{MovieDetail, MovieSummary};
use crate::error::NetworkError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRemoteSource: Send + Sync {
    /// One page of the now-playing feed. An empty list means the feed is exhausted.
    async fn fetch_movies_page(&self, page: u32) -> Result<Vec<MovieSummary>, NetworkError>;

    async fn fetch_movie_detail(&self, id: i64) -> Result<MovieDetail, NetworkError>;
}
