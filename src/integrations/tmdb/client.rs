// src/integrations/tmdb/client.rs
//
// TMDB movie API client
//
// ARCHITECTURE:
// - REST client for the "now playing" feed and movie details
// - Bearer-token authentication
// - Maps wire DTOs -> domain values (NO cache access)
// - Every failure is reduced to a NetworkError kind
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches the local cache; the repository decides what to store

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use super::dto::{MovieDetailDto, NowPlayingResponse};
use crate::domain::{MovieDetail, MovieSummary};
use crate::error::{AppError, AppResult, NetworkError};
use crate::integrations::MovieRemoteSource;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/movie";

/// TMDB movie API client
pub struct TmdbClient {
    base_url: String,
    http_client: Client,
    auth_token: String,
}

impl TmdbClient {
    /// Create a client for `base_url` (e.g. `https://api.themoviedb.org/3/movie`)
    pub fn new(base_url: &str, auth_token: String, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            auth_token,
        })
    }

    // ========================================================================
    // INTERNAL: request execution
    // ========================================================================

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, NetworkError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|e| {
                log::warn!("TMDB request to {} failed: {}", url, e);
                transport_error(&e)
            })?;

        let status = response.status();
        if let Some(err) = NetworkError::from_status(status.as_u16()) {
            log::warn!("TMDB {} returned status {}", url, status);
            return Err(err);
        }

        let body = response.bytes().await.map_err(|e| {
            log::warn!("TMDB body read from {} failed: {}", url, e);
            transport_error(&e)
        })?;

        if body.is_empty() {
            return Err(NetworkError::NoData);
        }

        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("TMDB response from {} did not decode: {}", url, e);
            NetworkError::UnableToDecode
        })
    }
}

fn transport_error(err: &reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout
    } else if err.is_decode() {
        NetworkError::UnableToDecode
    } else {
        NetworkError::ConnectionFailed
    }
}

#[async_trait]
impl MovieRemoteSource for TmdbClient {
    async fn fetch_movies_page(&self, page: u32) -> Result<Vec<MovieSummary>, NetworkError> {
        let response: NowPlayingResponse = self
            .get_json("now_playing", &[("page", page.to_string())])
            .await?;

        log::debug!(
            "now_playing page {} of {:?} ({:?} results total)",
            response.page.unwrap_or(page),
            response.total_pages,
            response.total_results
        );

        let results = response.results.unwrap_or_default();
        let received = results.len();

        let movies: Vec<MovieSummary> = results
            .into_iter()
            .filter_map(|dto| dto.into_summary(page))
            .collect();

        // Entries without ids are not an exhausted feed
        if movies.is_empty() && received > 0 {
            log::warn!("now_playing page {} had {} entries, none with an id", page, received);
            return Err(NetworkError::UnableToDecode);
        }

        Ok(movies)
    }

    async fn fetch_movie_detail(&self, id: i64) -> Result<MovieDetail, NetworkError> {
        let dto: MovieDetailDto = self.get_json(&id.to_string(), &[]).await?;
        Ok(dto.into_detail(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/3/movie", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (base_url, handle)
    }

    fn client(base_url: &str) -> TmdbClient {
        TmdbClient::new(base_url, "test-token".to_string(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_client_creation_trims_slash() {
        let client = TmdbClient::new(
            "https://api.themoviedb.org/3/movie/",
            "t".to_string(),
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_fetch_movies_page_sends_page_and_token() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"page": 2, "results": [{"id": 10, "title": "A"}], "total_pages": 5}"#,
        )
        .await;

        let movies = client(&base_url).fetch_movies_page(2).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 10);
        assert_eq!(movies[0].page, 2);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /3/movie/now_playing?page=2 "));
        assert!(request.to_lowercase().contains("authorization: bearer test-token"));
    }

    #[tokio::test]
    async fn test_fetch_movie_detail() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"id": 10, "title": "A", "runtime": 101, "genres": [{"id": 1, "name": "G"}]}"#,
        )
        .await;

        let detail = client(&base_url).fetch_movie_detail(10).await.unwrap();
        assert_eq!(detail.runtime, 101);
        assert_eq!(detail.genres.len(), 1);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /3/movie/10 "));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_error() {
        let (base_url, _server) = serve_once("401 Unauthorized", r#"{"status_code": 7}"#).await;
        let err = client(&base_url).fetch_movies_page(1).await.unwrap_err();
        assert_eq!(err, NetworkError::AuthenticationError);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_bad_request() {
        let (base_url, _server) = serve_once("404 Not Found", "{}").await;
        let err = client(&base_url).fetch_movie_detail(1).await.unwrap_err();
        assert_eq!(err, NetworkError::BadRequest);
    }

    #[tokio::test]
    async fn test_server_error() {
        let (base_url, _server) = serve_once("503 Service Unavailable", "").await;
        let err = client(&base_url).fetch_movies_page(1).await.unwrap_err();
        assert_eq!(err, NetworkError::ServerError);
    }

    #[tokio::test]
    async fn test_empty_body_is_no_data() {
        let (base_url, _server) = serve_once("200 OK", "").await;
        let err = client(&base_url).fetch_movies_page(1).await.unwrap_err();
        assert_eq!(err, NetworkError::NoData);
    }

    #[tokio::test]
    async fn test_garbage_body_is_unable_to_decode() {
        let (base_url, _server) = serve_once("200 OK", "<html>").await;
        let err = client(&base_url).fetch_movies_page(1).await.unwrap_err();
        assert_eq!(err, NetworkError::UnableToDecode);
    }

    #[tokio::test]
    async fn test_page_without_any_ids_is_unable_to_decode() {
        let (base_url, _server) =
            serve_once("200 OK", r#"{"page": 1, "results": [{"title": "A"}, {"title": "B"}]}"#).await;
        let err = client(&base_url).fetch_movies_page(1).await.unwrap_err();
        assert_eq!(err, NetworkError::UnableToDecode);
    }

    #[tokio::test]
    async fn test_empty_results_is_empty_page() {
        let (base_url, _server) = serve_once("200 OK", r#"{"page": 9, "results": []}"#).await;
        let movies = client(&base_url).fetch_movies_page(9).await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_failed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .fetch_movies_page(1)
            .await
            .unwrap_err();
        assert_eq!(err, NetworkError::ConnectionFailed);
    }
}
