pub mod activity;
pub mod contact;
pub mod errors;
pub mod pagination;
pub mod timestamps;
