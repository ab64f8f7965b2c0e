#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
