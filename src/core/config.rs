use super::constants::{
    DEFAULT_CONTAINER_ID, DEFAULT_DENSITY, DEFAULT_IMAGE, MAX_DENSITY, PLAYER_MODE_MARKER,
};

/// Page-level settings for one snow overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct SnowConfig {
    pub density: usize,
    pub images: Vec<String>,
    pub container_id: String,
    pub player_mode_marker: String,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            images: vec![DEFAULT_IMAGE.to_string()],
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            player_mode_marker: PLAYER_MODE_MARKER.to_string(),
        }
    }
}

impl SnowConfig {
    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    pub fn with_images<I, T>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
}

/// Density from an untrusted number: `None` unless finite and non-negative,
/// clamped to `MAX_DENSITY`.
pub fn density_from_f64(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value as usize).min(MAX_DENSITY))
}
