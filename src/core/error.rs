use thiserror::Error;

/// Errors surfaced by the DocFlow session model.
#[derive(Debug, Error)]
pub enum DocflowError {
    /// Export was requested while nothing is selected.
    #[error("no document selected")]
    NoSelection,

    /// The credential verifier refused the login.
    #[error("credentials rejected")]
    Rejected,

    /// The durable session store is unavailable or rejected the operation.
    #[error("session storage: {0}")]
    Storage(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = DocflowError> = std::result::Result<T, E>;
