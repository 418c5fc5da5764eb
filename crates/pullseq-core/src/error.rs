use thiserror::Error;

/// Canonical result for pullseq.
pub type Result<T> = std::result::Result<T, Error>;

/// Alias used by downstream crates so signatures read as sequence errors.
pub type SeqError = Error;

/// Errors are reserved for cardinality contracts, configuration, and the
/// channel worker. An empty or absent sequence is never an error by itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("sequence contains no elements")]
    Empty,

    #[error("sequence contains more than one element")]
    MoreThanOne,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("channel worker failed to start: {0}")]
    WorkerSpawn(String),

    #[error("channel worker panicked: {0}")]
    WorkerPanicked(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
