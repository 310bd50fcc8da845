use thiserror::Error;

#[derive(Debug, Error)]
pub enum GestureError {
    #[error("gesture index {0} appears more than once")]
    DuplicateIndex(u32),
    #[error("invalid gesture JSON: {0}")]
    Json(#[from] serde_json::Error),
}
