// Stores layer - Data access and repository pattern
pub mod clock;
pub mod item_store;
pub mod person_store;

pub use item_store::{ItemChanges, ItemFilter, ItemStore, NewItem};
pub use person_store::PersonStore;
