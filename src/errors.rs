use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("client error: {0}")]
    Client(#[from] ClientError),

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

/// Local, pre-network failures. None of these ever reach the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("league name cannot be empty")]
    EmptyLeagueName,
    #[error("at least one age group is required")]
    NoAgeGroups,
    #[error("group {0} needs a name and at least one birthdate bound")]
    IncompleteAgeGroup(usize),
    #[error("only .csv files can be uploaded")]
    NotACsvFile,
    #[error("another operation is already in flight")]
    OperationInFlight,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-ok response; the message is the response body.
    #[error("request failed: {0}")]
    Request(String),
    /// Network-level failure before any response was read.
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Msg(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        IOError::Msg(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::Serialization(e.to_string())
    }
}
