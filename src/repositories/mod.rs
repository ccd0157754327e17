// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories combine the local cache with the remote source
// - Transport failures stop here; callers only see persistence errors
// - NO presentation concerns

pub mod movie_repository;


pub use movie_repository::MovieRepository;
