// src/integrations/tmdb/dto.rs
//
// Wire shapes of the TMDB movie endpoints and their mapping to domain types.
// Every field is optional upstream; missing values map to empty defaults.

use chrono::Utc;
use serde::Deserialize;

use crate::domain::{Genre, MovieDetail, MovieSummary};

/// `GET /movie/now_playing` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct NowPlayingResponse {
    pub page: Option<u32>,
    pub results: Option<Vec<MovieDto>>,
    pub total_pages: Option<u32>,
    pub total_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovieDto {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

/// `GET /movie/{id}`
#[derive(Debug, Deserialize)]
pub(crate) struct MovieDetailDto {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub genres: Option<Vec<GenreDto>>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenreDto {
    pub id: i64,
    pub name: Option<String>,
}

impl MovieDto {
    /// `None` for entries without an id; they cannot be cached.
    pub fn into_summary(self, page: u32) -> Option<MovieSummary> {
        let id = self.id?;
        Some(MovieSummary {
            id,
            title: self.title.unwrap_or_default(),
            poster_path: self.poster_path.unwrap_or_default(),
            release_date: self.release_date.unwrap_or_default(),
            vote_average: self.vote_average.unwrap_or_default(),
            is_favorite: false,
            page,
            created_at: Utc::now(),
        })
    }
}

impl MovieDetailDto {
    /// `requested_id` fills in a missing id in the body.
    pub fn into_detail(self, requested_id: i64) -> MovieDetail {
        MovieDetail {
            id: self.id.unwrap_or(requested_id),
            title: self.title.unwrap_or_default(),
            genres: self
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name.unwrap_or_default(),
                })
                .collect(),
            overview: self.overview.unwrap_or_default(),
            poster_path: self.poster_path.unwrap_or_default(),
            release_date: self.release_date.unwrap_or_default(),
            vote_average: self.vote_average.unwrap_or_default(),
            runtime: self.runtime.unwrap_or_default(),
            is_favorite: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_PLAYING: &str = r#"{
        "dates": {"maximum": "2025-08-20", "minimum": "2025-07-09"},
        "page": 1,
        "results": [
            {
                "adult": false,
                "id": 1061474,
                "original_title": "Superman",
                "poster_path": "/ombsmhYUqR4qqOLOxAyr5V8hbyv.jpg",
                "release_date": "2025-07-09",
                "title": "Superman",
                "vote_average": 7.5,
                "vote_count": 2154
            },
            {"title": "No id"}
        ],
        "total_pages": 277,
        "total_results": 5535
    }"#;

    #[test]
    fn test_decode_now_playing() {
        let response: NowPlayingResponse = serde_json::from_str(NOW_PLAYING).unwrap();
        assert_eq!(response.page, Some(1));
        assert_eq!(response.total_pages, Some(277));

        let movies: Vec<MovieSummary> = response
            .results
            .unwrap_or_default()
            .into_iter()
            .filter_map(|dto| dto.into_summary(1))
            .collect();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 1061474);
        assert_eq!(movies[0].title, "Superman");
        assert_eq!(movies[0].vote_average, 7.5);
        assert!(!movies[0].is_favorite);
    }

    #[test]
    fn test_missing_results_is_empty() {
        let response: NowPlayingResponse = serde_json::from_str(r#"{"page": 9}"#).unwrap();
        assert!(response.results.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_decode_detail() {
        let json = r#"{
            "id": 550,
            "title": "Fight Club",
            "genres": [{"id": 18, "name": "Drama"}],
            "overview": "A ticking-time-bomb insomniac...",
            "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            "release_date": "1999-10-15",
            "runtime": 139,
            "vote_average": 8.4
        }"#;
        let detail = serde_json::from_str::<MovieDetailDto>(json)
            .unwrap()
            .into_detail(550);

        assert_eq!(detail.id, 550);
        assert_eq!(detail.runtime, 139);
        assert_eq!(detail.genres, vec![Genre { id: 18, name: "Drama".to_string() }]);
        assert!(!detail.is_favorite);
    }

    #[test]
    fn test_detail_without_id_uses_requested() {
        let detail = serde_json::from_str::<MovieDetailDto>(r#"{"title": "X"}"#)
            .unwrap()
            .into_detail(42);
        assert_eq!(detail.id, 42);
        assert_eq!(detail.runtime, 0);
    }
}
