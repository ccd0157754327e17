// src/integrations/mod.rs
//
// External Integrations Module
//
// Upstream movie data. The repository only sees `MovieRemoteSource`.

pub mod remote_source;
pub mod tmdb;

pub use remote_source::MovieRemoteSource;
#[cfg(test)]
pub use remote_source::MockMovieRemoteSource;
pub use tmdb::TmdbClient;
