use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for one user action. Every variant is terminal for the
/// triggering action and never fatal to the session.
#[derive(Error, Debug)]
pub enum Error {
    /// Local validation failure: the update form had every field left
    /// untouched. Never reaches the network.
    #[error("no information provided for update")]
    NoFieldsProvided,

    /// Non-2xx response whose body carried a structured `detail` field.
    #[error("backend rejected the request (status {status}): {detail}")]
    BackendRejected { status: u16, detail: String },

    /// Non-2xx response whose body was not the expected error shape.
    #[error("backend returned status {status} with an undecodable body")]
    BackendUnparseable { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
