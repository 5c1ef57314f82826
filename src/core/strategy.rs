//! The four fit strategies and their dispatch.
//!
//! Each strategy takes a source image and the rounded target dimensions and
//! produces a new image at exactly that size, composing over the `resize`
//! and `border` primitives.

use tracing::debug;

use crate::core::border::{self, PadAmounts};
use crate::core::geometry;
use crate::core::pixel::{CHANNELS, PixelImage};
use crate::core::resize;
use crate::error::Result;
use crate::types::{FitMode, ResampleMethod};

/// Apply one fit strategy, producing an image at exactly
/// `target_w x target_h`. An image already at the target dimensions is
/// returned unchanged. Dispatch is exhaustive; there is no fallback mode.
pub fn apply_fit(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
    fit: FitMode,
    method: ResampleMethod,
) -> Result<PixelImage> {
    if src.width() == target_w && src.height() == target_h {
        debug!("already at {}x{}, skipping {}", target_w, target_h, fit);
        return Ok(src.clone());
    }
    match fit {
        FitMode::StretchFill => stretch_fill(src, target_w, target_h, method),
        FitMode::Letterbox => letterbox(src, target_w, target_h, method),
        FitMode::CenterCrop => center_crop(src, target_w, target_h, method),
        FitMode::SmartFill => smart_fill(src, target_w, target_h, method),
    }
}

/// Resample straight to target with independent axis scales; aspect ratio
/// may distort.
fn stretch_fill(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
    method: ResampleMethod,
) -> Result<PixelImage> {
    resize::resample(src, target_w, target_h, method)
}

/// Shared scaling step of letterbox and smart fill: uniform fit scale, so
/// the content lands entirely inside the target box.
fn scale_to_fit(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
    method: ResampleMethod,
) -> Result<PixelImage> {
    let scale = geometry::fit_scale(src.width(), src.height(), target_w, target_h);
    let (scaled_w, scaled_h) = geometry::scaled_dimensions(src.width(), src.height(), scale);
    resize::resample(src, scaled_w, scaled_h, method)
}

fn letterbox(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
    method: ResampleMethod,
) -> Result<PixelImage> {
    let scaled = scale_to_fit(src, target_w, target_h, method)?;
    let pads = PadAmounts::centered(target_w - scaled.width(), target_h - scaled.height());
    border::constant_pad(&scaled, pads)
}

fn smart_fill(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
    method: ResampleMethod,
) -> Result<PixelImage> {
    let scaled = scale_to_fit(src, target_w, target_h, method)?;
    let pads = PadAmounts::centered(target_w - scaled.width(), target_h - scaled.height());
    border::mirror_pad(&scaled, pads)
}

fn center_crop(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
    method: ResampleMethod,
) -> Result<PixelImage> {
    let scale = geometry::cover_scale(src.width(), src.height(), target_w, target_h);
    let (scaled_w, scaled_h) = geometry::scaled_dimensions(src.width(), src.height(), scale);
    let scaled = resize::resample(src, scaled_w, scaled_h, method)?;
    crop_centered(&scaled, target_w, target_h)
}

/// Centered crop window; the cover scale guarantees the window fits, with
/// the origin biased top/left on an odd remainder.
pub(crate) fn crop_centered(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
) -> Result<PixelImage> {
    debug_assert!(target_w <= src.width() && target_h <= src.height());
    let left = (src.width() - target_w) / 2;
    let top = (src.height() - target_h) / 2;

    let src_row_len = src.width() * CHANNELS;
    let out_row_len = target_w * CHANNELS;
    let mut data = Vec::with_capacity(target_w * target_h * CHANNELS);
    for row in 0..target_h {
        let offset = (row + top) * src_row_len + left * CHANNELS;
        data.extend_from_slice(&src.data()[offset..offset + out_row_len]);
    }
    PixelImage::from_raw(target_w, target_h, data)
}
