// src/error/mod.rs

pub mod network;
pub mod types;

pub use network::NetworkError;
pub use types::{AppError, AppResult};
