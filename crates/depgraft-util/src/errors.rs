use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depgraft operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GraftError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed attribute schema.
    #[error("Schema error: {message}")]
    #[diagnostic(help("Check the [attributes] tables of your schema file"))]
    Schema { message: String },

    /// No variant of the target component is compatible with the consumer.
    #[error("No variant of {component} matches the consumer attributes {attributes}")]
    #[diagnostic(help("Declare a compatibility rule or publish a matching variant"))]
    NoMatchingVariant {
        component: String,
        attributes: String,
    },

    /// More than one variant remained after disambiguation.
    #[error("Cannot choose between the variants of {component}: {}", .candidates.join(", "))]
    #[diagnostic(help("Add a `prefer` order for one of the differing attributes"))]
    AmbiguousVariant {
        component: String,
        candidates: Vec<String>,
    },
}

/// Convenience alias for `miette::Result<T>`.
pub type GraftResult<T> = miette::Result<T>;
