pub mod database;
pub mod pagination;
pub mod repositories;
pub mod time;
