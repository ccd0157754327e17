// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Database utilities

pub mod connection;
pub mod migrations;

pub use connection::{
    create_connection_pool, create_memory_pool, default_database_path, get_connection,
    ConnectionPool, PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};

/// In-memory pool with the schema applied, for tests across modules
#[cfg(test)]
pub(crate) fn test_pool() -> std::sync::Arc<ConnectionPool> {
    let pool = create_memory_pool().expect("in-memory pool");
    {
        let conn = get_connection(&pool).expect("connection");
        initialize_database(&conn).expect("schema");
    }
    std::sync::Arc::new(pool)
}
