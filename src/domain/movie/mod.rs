pub mod entity;
pub mod invariants;

pub use entity::{Genre, MovieDetail, MovieSummary, POSTER_BASE_URL};
pub use invariants::{validate_movie_detail, validate_movie_summary};
