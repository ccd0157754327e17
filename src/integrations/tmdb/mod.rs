pub mod client;
mod dto;

pub use client::{TmdbClient, DEFAULT_BASE_URL};
