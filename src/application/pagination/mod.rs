// src/application/pagination/mod.rs
mod config;
mod links;
mod paginator;

pub use config::{
    DEFAULT_CURSOR_FIELD, DEFAULT_LIMIT_PARAM, DEFAULT_PAGE_SIZE, KeysetConfig,
    KeysetConfigBuilder, KeysetConfigError,
};
pub use links::replace_query_param;
pub use paginator::KeysetPaginator;
