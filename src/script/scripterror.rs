use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    JsonParseError(#[from] serde_json::Error)
}
