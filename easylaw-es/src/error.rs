#[derive(Debug, thiserror::Error)]
pub enum EsError {
    #[error("invalid engine url '{0}'")]
    InvalidUrl(String),

    #[error("tls setup failed: {0}")]
    Tls(String),

    #[error("engine call timed out after {0}s")]
    Timeout(u64),

    #[error("engine request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("engine response exceeds {max} bytes")]
    TooLarge { max: usize },

    #[error("engine returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("engine response is not valid json: {0}")]
    Decode(#[from] serde_json::Error),
}
