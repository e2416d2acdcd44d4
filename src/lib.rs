//! Base-layer building blocks for an Axum API backend: keyset (cursor)
//! pagination, timestamped base records, contact field types and OpenAPI
//! customization.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
