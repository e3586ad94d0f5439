use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SnowError {
    /// `setup` was handed an empty image list.
    #[error("no images provided")]
    NoImages,
    /// The overlay container is missing from the page.
    #[error("snow container not found")]
    SurfaceUnavailable,
    /// `start` was called before any flakes were created.
    #[error("no snowflakes found, did you forget to call setup()?")]
    Uninitialized,
}

impl SnowError {
    /// Configuration errors leave the engine untouched and can be retried.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SnowError::NoImages | SnowError::SurfaceUnavailable)
    }
}
