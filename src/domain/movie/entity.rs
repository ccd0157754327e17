use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL for poster images at the size the list and detail screens use.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A list item of the "now playing" feed.
///
/// One cached row exists per `(id, page)`: upstream data may list the same
/// movie under several pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Upstream movie identifier
    pub id: i64,

    pub title: String,

    /// Relative poster path, empty when upstream has none
    pub poster_path: String,

    /// Release date as sent upstream (YYYY-MM-DD)
    pub release_date: String,

    pub vote_average: f64,

    /// Client-local favorite flag
    pub is_favorite: bool,

    /// Page this record was fetched under
    pub page: u32,

    /// Stamped when the record is cached; fetch order key
    pub created_at: DateTime<Utc>,
}

impl MovieSummary {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: String::new(),
            release_date: String::new(),
            vote_average: 0.0,
            is_favorite: false,
            page: 1,
            created_at: Utc::now(),
        }
    }

    /// Copy of this summary tagged for `page` and stamped with `at`.
    pub fn stamped(&self, page: u32, at: DateTime<Utc>) -> Self {
        Self {
            page,
            created_at: at,
            ..self.clone()
        }
    }

    pub fn poster_url(&self) -> Option<String> {
        poster_url(&self.poster_path)
    }
}

/// Genre value object; opaque to the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Full movie details.
///
/// `MovieDetail::default()` is the empty detail handed out when neither
/// the cache nor the remote source can answer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    pub genres: Vec<Genre>,
    pub overview: String,
    pub poster_path: String,
    pub release_date: String,
    pub vote_average: f64,

    /// Runtime in minutes, 0 when unknown
    pub runtime: u32,

    pub is_favorite: bool,
}

impl MovieDetail {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Self::default()
        }
    }

    /// True for the placeholder returned on a total miss.
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }

    pub fn poster_url(&self) -> Option<String> {
        poster_url(&self.poster_path)
    }

    /// Comma separated genre names, in upstream order.
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn poster_url(path: &str) -> Option<String> {
    if path.is_empty() {
        None
    } else {
        Some(format!("{}{}", POSTER_BASE_URL, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_keeps_fields() {
        let mut movie = MovieSummary::new(10, "A");
        movie.is_favorite = true;
        let at = Utc::now();

        let stamped = movie.stamped(3, at);
        assert_eq!(stamped.id, 10);
        assert_eq!(stamped.page, 3);
        assert_eq!(stamped.created_at, at);
        assert!(stamped.is_favorite);
    }

    #[test]
    fn test_default_detail_is_empty() {
        assert!(MovieDetail::default().is_empty());
        assert!(!MovieDetail::new(5, "Dune").is_empty());
    }

    #[test]
    fn test_poster_url() {
        let mut movie = MovieSummary::new(1, "A");
        assert_eq!(movie.poster_url(), None);

        movie.poster_path = "/abc.jpg".to_string();
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn test_genre_names() {
        let mut detail = MovieDetail::new(1, "A");
        detail.genres = vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 12, name: "Adventure".to_string() },
        ];
        assert_eq!(detail.genre_names(), "Action, Adventure");
    }
}
