// src/services/mod.rs
//
// Use cases the presentation layer calls. Thin wrappers over the repository.

pub mod movie_details_use_case;
pub mod movies_use_case;


pub use movie_details_use_case::MovieDetailsUseCase;
pub use movies_use_case::MoviesUseCase;
