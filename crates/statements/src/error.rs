//! Statement rendering errors

use thiserror::Error;

/// Errors surfaced by strict format resolution.
///
/// The non-strict [`resolve`](crate::RendererRegistry::resolve) path never
/// returns these; it recovers locally by substituting the plain renderer.
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("Unknown statement format: {requested}")]
    UnknownFormat { requested: String },
}

/// Result type alias for statement operations
pub type StatementResult<T> = Result<T, StatementError>;
