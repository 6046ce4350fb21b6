use thiserror::Error;

/// Errors raised while building property values from external input
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON object for a property record, found {found}")]
    NotAnObject { found: String },

    #[error("Malformed `{marker}` value: {details}")]
    MalformedMarker { marker: String, details: String },
}
