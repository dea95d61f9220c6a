use thiserror::Error;

/// The main error type for entity operations.
///
/// Construction, serialization and merging never fail on plain-object input,
/// so this type only surfaces from the explicit checking and decoding entry
/// points.
#[derive(Error, Debug)]
pub enum EntityError {
    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `0` - The underlying validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Represents input that is not shaped like a plain record
    ///
    /// # Fields
    /// * `0` - A description of what was received instead
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Specialized error type for validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more fields hold a value whose type does not match the schema
    ///
    /// # Fields
    /// * `fields` - Wire names of the failing fields, in declared order
    #[error("Fields failed type validation: {}", fields.join(", "))]
    Fields { fields: Vec<&'static str> },
}

/// Type alias for Results that may fail with an EntityError
pub type EntityResult<T> = Result<T, EntityError>;
