use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i32),

    /// The referenced holder does not exist
    #[error("Person not found: {0}")]
    PersonNotFound(i32),
}
