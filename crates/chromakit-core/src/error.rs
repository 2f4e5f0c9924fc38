/// Errors produced while parsing colors, blend modes, or processor configuration.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("hex color must have 3, 6, or 8 digits, got {0}")]
    InvalidHexLength(usize),
    #[error("invalid hex digits: {0}")]
    InvalidHexDigit(String),
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),
    #[error("invalid processor config: {0}")]
    Config(#[from] serde_json::Error),
}
