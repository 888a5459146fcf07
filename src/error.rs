use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the explicit type hint nor the guessed file format matched any
    /// resolver rule.
    #[error("unknown track type (type: {type_hint:?}, format: {format_hint:?})")]
    UnknownTrackType {
        type_hint: Option<String>,
        format_hint: Option<String>,
    },

    /// A track or configuration did not satisfy the schema of its resolved
    /// variant: unknown field, missing required field, or a value outside an
    /// enumerated literal set.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// A local file reference does not exist or is not a regular file.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The external resource provider failed; propagated unchanged, never
    /// retried here.
    #[error("resource provider failure: {0}")]
    ResourceProvider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn schema(err: serde_json::Error) -> Self {
        Error::SchemaViolation(err.to_string())
    }
}
