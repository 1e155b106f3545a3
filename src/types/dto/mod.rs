// API request/response models
pub mod common;
pub mod items;
pub mod people;
