use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedisError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid identity token: {0}")]
    InvalidToken(String),

    #[error("Login flow is already running")]
    FlowBusy,

    #[error("Login flow was reset while running")]
    FlowCancelled,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type MedisResult<T> = Result<T, MedisError>;
