use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unknown block kind: {0}")]
    UnknownKind(String),

    #[error("Unknown text style: {0}")]
    UnknownTextStyle(String),

    #[error("Invalid {kind} payload: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}
