// Database entities - SeaORM models
pub mod item;
pub mod person;
