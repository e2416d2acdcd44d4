// src/infrastructure/repositories/mod.rs
mod error;
mod memory_activity;
mod postgres_activity;

pub use error::map_sqlx;
pub use memory_activity::InMemoryActivityRepository;
pub use postgres_activity::PostgresActivityRepository;
