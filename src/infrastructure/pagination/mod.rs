mod memory;

pub use memory::{InMemorySource, select_page};
