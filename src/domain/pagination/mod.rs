// src/domain/pagination/mod.rs
pub mod cursor;
pub mod direction;
pub mod page;
pub mod request;
pub mod source;

pub use cursor::{Cursor, CursorCodec, DEFAULT_PRECISION};
pub use direction::{Comparison, Direction, ParseDirectionError};
pub use page::Page;
pub use request::{PageRequest, QueryParams};
pub use source::{CursorRecord, KeysetBound, KeysetQuery, KeysetSource};
