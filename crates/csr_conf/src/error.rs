#[derive(Debug, thiserror::Error)]
pub enum CsrConfError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid ip address format: {0:?}")]
    InvalidIpFormat(String),

    #[error("invalid hostname format: {0:?}")]
    InvalidHostnameFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
