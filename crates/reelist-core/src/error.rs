use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReelistError {
    #[error("store error: {0}")]
    Store(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
