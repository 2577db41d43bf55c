#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Status code: {0}")]
    StatusCode(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Invalid response")]
    InvalidResponse,
}
