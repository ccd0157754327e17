// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Composition root: builds the object graph from configuration
// - No business logic here; the CLI talks to the use cases it exposes

pub mod state;

pub use state::AppState;
