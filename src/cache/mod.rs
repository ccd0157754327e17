// src/cache/mod.rs
//
// Local movie cache over the persistent store.

pub mod movie_cache;


pub use movie_cache::{CacheStats, MovieLocalCache, StoreMovieCache};
