// src/application/dto/mod.rs
mod activities;
mod pagination;

pub use activities::ActivityDto;
pub use pagination::PaginatedResponse;
