use serde::{Deserialize, Serialize};

use crate::types::{FitMode, ResampleMethod, RoundingMultiple};

/// Normalization parameters suitable for config presets and embedding
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeParams {
    pub fit: FitMode,
    pub method: ResampleMethod,
    /// Divisor the target width and height must be multiples of
    pub round_to_multiple: RoundingMultiple,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            fit: FitMode::SmartFill,
            method: ResampleMethod::Lanczos,
            round_to_multiple: RoundingMultiple::M16,
        }
    }
}
