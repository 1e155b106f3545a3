use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonError {
    #[error("Person not found: {0}")]
    NotFound(i32),
}
