//! Shared types and enums used across RESNORM.
//! Includes the fit strategies (`FitMode`), resampling kernels
//! (`ResampleMethod`), and the allowed dimension divisors (`RoundingMultiple`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Strategy for reconciling the source aspect ratio with the rounded target
/// dimensions. Exactly one applies per invocation; there is no fallback.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum FitMode {
    /// Stretch to target on both axes independently; aspect ratio may distort.
    #[value(name = "fill")]
    StretchFill,
    /// Scale to fit, pad the remainder with black bars.
    Letterbox,
    /// Scale to cover, crop the centered excess.
    #[value(name = "crop")]
    CenterCrop,
    /// Scale to fit, synthesize the remainder by mirror reflection.
    SmartFill,
}

impl std::fmt::Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FitMode::StretchFill => "fill",
            FitMode::Letterbox => "letterbox",
            FitMode::CenterCrop => "crop",
            FitMode::SmartFill => "smart_fill",
        };
        write!(f, "{}", s)
    }
}

/// Interpolation kernel used by any internal scaling step. Orthogonal to
/// `FitMode`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResampleMethod {
    Lanczos,
    Bicubic,
    Hamming,
    Bilinear,
    Box,
    Nearest,
}

impl std::fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleMethod::Lanczos => "lanczos",
            ResampleMethod::Bicubic => "bicubic",
            ResampleMethod::Hamming => "hamming",
            ResampleMethod::Bilinear => "bilinear",
            ResampleMethod::Box => "box",
            ResampleMethod::Nearest => "nearest",
        };
        write!(f, "{}", s)
    }
}

/// Divisor that target width and height must be exact multiples of.
/// Closed set; values outside it are rejected at construction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum RoundingMultiple {
    M2,
    M4,
    M8,
    M14,
    M16,
    M28,
    M32,
    M64,
    M128,
    M256,
    M512,
}

pub const ALLOWED_MULTIPLES: &[u32] = &[2, 4, 8, 14, 16, 28, 32, 64, 128, 256, 512];

impl RoundingMultiple {
    pub fn value(self) -> u32 {
        match self {
            RoundingMultiple::M2 => 2,
            RoundingMultiple::M4 => 4,
            RoundingMultiple::M8 => 8,
            RoundingMultiple::M14 => 14,
            RoundingMultiple::M16 => 16,
            RoundingMultiple::M28 => 28,
            RoundingMultiple::M32 => 32,
            RoundingMultiple::M64 => 64,
            RoundingMultiple::M128 => 128,
            RoundingMultiple::M256 => 256,
            RoundingMultiple::M512 => 512,
        }
    }
}

impl TryFrom<u32> for RoundingMultiple {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(RoundingMultiple::M2),
            4 => Ok(RoundingMultiple::M4),
            8 => Ok(RoundingMultiple::M8),
            14 => Ok(RoundingMultiple::M14),
            16 => Ok(RoundingMultiple::M16),
            28 => Ok(RoundingMultiple::M28),
            32 => Ok(RoundingMultiple::M32),
            64 => Ok(RoundingMultiple::M64),
            128 => Ok(RoundingMultiple::M128),
            256 => Ok(RoundingMultiple::M256),
            512 => Ok(RoundingMultiple::M512),
            other => Err(Error::InvalidMultiple {
                value: other,
                allowed: ALLOWED_MULTIPLES,
            }),
        }
    }
}

// Manual implementation for ValueEnum since the CLI spellings are numeric
impl clap::ValueEnum for RoundingMultiple {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            RoundingMultiple::M2,
            RoundingMultiple::M4,
            RoundingMultiple::M8,
            RoundingMultiple::M14,
            RoundingMultiple::M16,
            RoundingMultiple::M28,
            RoundingMultiple::M32,
            RoundingMultiple::M64,
            RoundingMultiple::M128,
            RoundingMultiple::M256,
            RoundingMultiple::M512,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(match self {
            RoundingMultiple::M2 => "2",
            RoundingMultiple::M4 => "4",
            RoundingMultiple::M8 => "8",
            RoundingMultiple::M14 => "14",
            RoundingMultiple::M16 => "16",
            RoundingMultiple::M28 => "28",
            RoundingMultiple::M32 => "32",
            RoundingMultiple::M64 => "64",
            RoundingMultiple::M128 => "128",
            RoundingMultiple::M256 => "256",
            RoundingMultiple::M512 => "512",
        }))
    }
}

impl std::fmt::Display for RoundingMultiple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
