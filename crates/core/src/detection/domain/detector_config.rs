use crate::error::DetectionError;
use crate::shared::constants::{DEFAULT_MIN_NEIGHBORS, DEFAULT_MIN_SIZE, DEFAULT_SCALE_FACTOR};

/// Multi-scale search parameters for the cascade detector.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    /// Growth factor between successive window sizes. Must be > 1.
    pub scale_factor: f64,
    /// Raw hits a merged box needs (strictly more than this) to survive.
    /// 0 disables merging.
    pub min_neighbors: u32,
    /// Smallest window size `(width, height)` considered.
    pub min_size: (u32, u32),
    /// Largest window size; `None` means the image size.
    pub max_size: Option<(u32, u32)>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            min_size: DEFAULT_MIN_SIZE,
            max_size: None,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<(), DetectionError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 1.0 {
            return Err(DetectionError::InvalidConfig(format!(
                "scale factor must be greater than 1.0, got {}",
                self.scale_factor
            )));
        }
        if self.min_size.0 == 0 || self.min_size.1 == 0 {
            return Err(DetectionError::InvalidConfig(format!(
                "minimum size must be non-zero, got {}x{}",
                self.min_size.0, self.min_size.1
            )));
        }
        if let Some((w, h)) = self.max_size {
            if w < self.min_size.0 || h < self.min_size.1 {
                return Err(DetectionError::InvalidConfig(format!(
                    "maximum size {w}x{h} is smaller than minimum size {}x{}",
                    self.min_size.0, self.min_size.1
                )));
            }
        }
        Ok(())
    }
}
