use thiserror::Error;

/// Library-level error type shared by the intake adapters and the exporter.
///
/// The template renderer and the inline editor are infallible by contract:
/// partially-filled input renders as empty strings, so nothing in the render
/// path constructs this type.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Service error: {0}")]
    Service(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("PDF assembly failed: {0}")]
    PdfAssembly(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
