use thiserror::Error;

#[derive(Error, Debug)]
pub enum TangoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt vocabulary catalog: {0}")]
    CorruptCatalog(String),

    #[error("Corrupt learner state: {0}")]
    CorruptState(String),

    #[error("Unknown vocabulary id: {0}")]
    UnknownId(u32),

    #[error("Failed to persist learner state: {0}")]
    Persistence(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No session has been proposed")]
    NoActiveSession,
}

impl TangoError {
    /// Fatal errors leave the engine without a usable catalog or state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TangoError::CorruptCatalog(_) | TangoError::CorruptState(_))
    }
}

impl From<std::io::Error> for TangoError {
    fn from(error: std::io::Error) -> Self {
        TangoError::Io(Box::new(error))
    }
}
