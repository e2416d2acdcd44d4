pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Activity, Contact, NewActivity};
pub use repository::ActivityRepository;
pub use value_objects::{ActivityId, ActivityKind, ActivitySummary};
