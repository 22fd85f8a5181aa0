#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("gallery needs at least one slide")]
    EmptyDeck,
    #[error("slide index {index} is out of range for {total} slides")]
    SlideOutOfRange { index: usize, total: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
