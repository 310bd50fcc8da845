use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("practice session is already finished")]
    Finished,
    #[error("gesture set has no strokes to practice")]
    EmptySet,
    #[error("invalid practice configuration: {0}")]
    InvalidConfig(String),
    #[error("could not read practice configuration: {0}")]
    Config(#[from] serde_json::Error),
}
