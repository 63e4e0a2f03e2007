/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

/// Error returned by name-based UUID generation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The namespace argument is not a valid UUID string representation.
    #[error("namespace is not a valid UUID string representation")]
    InvalidNamespace(#[source] ParseError),
}
