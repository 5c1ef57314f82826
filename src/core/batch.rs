//! Batch entry point: `[N, H, W, 3]` tensor conversion, input validation,
//! and the per-image normalization loop.

use ndarray::{Array3, Array4, ArrayView3, Axis};
use tracing::info;

use crate::core::geometry;
use crate::core::params::NormalizeParams;
use crate::core::pixel::{CHANNELS, PixelImage};
use crate::core::strategy;
use crate::error::{Error, Result};

/// Output of [`normalize_batch`]: the restacked batch plus the uniform
/// target dimensions every image was normalized to.
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    /// `[N, target_h, target_w, 3]`, values in `[0, 1]`
    pub images: Array4<f32>,
    pub width: usize,
    pub height: usize,
}

/// Normalize every image in a `[N, H, W, 3]` batch (values in `[0, 1]`) to
/// dimensions divisible by the configured rounding multiple.
///
/// The target is computed once from the batch's shared source dimensions and
/// applied uniformly; output order and length match the input. Configuration
/// and shape problems surface before any per-image work.
pub fn normalize_batch(images: &Array4<f32>, params: &NormalizeParams) -> Result<NormalizedBatch> {
    let (n, src_h, src_w, channels) = images.dim();
    if n == 0 {
        return Err(Error::EmptyBatch);
    }
    if channels != CHANNELS {
        return Err(Error::InvalidShape {
            detail: format!("expected {} channels, got {}", CHANNELS, channels),
        });
    }
    if src_w == 0 || src_h == 0 {
        return Err(Error::ZeroSizeImage {
            width: src_w,
            height: src_h,
        });
    }

    let (target_w, target_h) =
        geometry::target_dimensions(src_w, src_h, params.round_to_multiple);
    info!(
        "Normalizing {} image(s): {}x{} -> {}x{} (fit={}, method={}, multiple={})",
        n, src_w, src_h, target_w, target_h, params.fit, params.method, params.round_to_multiple
    );

    let mut slabs = Vec::with_capacity(n);
    for view in images.axis_iter(Axis(0)) {
        let src = slab_to_image(view)?;
        let out = strategy::apply_fit(&src, target_w, target_h, params.fit, params.method)?;
        slabs.push(image_to_slab(&out)?);
    }

    let views: Vec<_> = slabs.iter().map(|s| s.view()).collect();
    let stacked = ndarray::stack(Axis(0), &views).map_err(Error::external)?;

    Ok(NormalizedBatch {
        images: stacked,
        width: target_w,
        height: target_h,
    })
}

/// Quantize one `[H, W, 3]` slab to RGB8. Values round to the nearest step
/// and clamp to `[0, 255]`; NaN maps to 0.
fn slab_to_image(slab: ArrayView3<'_, f32>) -> Result<PixelImage> {
    let (h, w, _) = slab.dim();
    let mut data = Vec::with_capacity(w * h * CHANNELS);
    for &v in slab.iter() {
        data.push((v * 255.0).round().clamp(0.0, 255.0) as u8);
    }
    PixelImage::from_raw(w, h, data)
}

fn image_to_slab(img: &PixelImage) -> Result<Array3<f32>> {
    let data: Vec<f32> = img.data().iter().map(|&b| b as f32 / 255.0).collect();
    Array3::from_shape_vec((img.height(), img.width(), CHANNELS), data)
        .map_err(Error::external)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FitMode, ResampleMethod, RoundingMultiple};

    fn params(fit: FitMode) -> NormalizeParams {
        NormalizeParams {
            fit,
            method: ResampleMethod::Nearest,
            round_to_multiple: RoundingMultiple::M16,
        }
    }

    #[test]
    fn batch_length_and_target_shape_are_preserved() {
        let batch = Array4::<f32>::from_elem((3, 50, 100, 3), 0.5);
        for fit in [
            FitMode::StretchFill,
            FitMode::Letterbox,
            FitMode::CenterCrop,
            FitMode::SmartFill,
        ] {
            let out = normalize_batch(&batch, &params(fit)).unwrap();
            assert_eq!(out.images.dim(), (3, 64, 112, 3), "fit={fit}");
            assert_eq!((out.width, out.height), (112, 64), "fit={fit}");
        }
    }

    #[test]
    fn values_stay_normalized() {
        let batch = Array4::<f32>::from_elem((1, 50, 100, 3), 1.0);
        let out = normalize_batch(&batch, &params(FitMode::StretchFill)).unwrap();
        for &v in out.images.iter() {
            assert!((0.0..=1.0).contains(&v));
        }
        // stretched solid white stays white
        assert_eq!(out.images[[0, 10, 10, 0]], 1.0);
    }

    #[test]
    fn already_divisible_batch_is_a_round_trip() {
        let mut batch = Array4::<f32>::zeros((2, 32, 64, 3));
        batch[[0, 3, 5, 1]] = 128.0 / 255.0;
        batch[[1, 30, 60, 2]] = 17.0 / 255.0;
        let out = normalize_batch(&batch, &params(FitMode::SmartFill)).unwrap();
        assert_eq!((out.width, out.height), (64, 32));
        assert_eq!(out.images, batch);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let batch = Array4::<f32>::zeros((0, 50, 100, 3));
        assert!(matches!(
            normalize_batch(&batch, &params(FitMode::SmartFill)),
            Err(Error::EmptyBatch)
        ));
    }

    #[test]
    fn wrong_channel_count_is_rejected() {
        let batch = Array4::<f32>::zeros((1, 8, 8, 4));
        assert!(matches!(
            normalize_batch(&batch, &params(FitMode::SmartFill)),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn zero_sized_source_is_rejected() {
        let batch = Array4::<f32>::zeros((1, 0, 8, 3));
        assert!(matches!(
            normalize_batch(&batch, &params(FitMode::SmartFill)),
            Err(Error::ZeroSizeImage { .. })
        ));
    }

    #[test]
    fn out_of_range_values_clamp_instead_of_wrapping() {
        let mut batch = Array4::<f32>::zeros((1, 32, 32, 3));
        batch[[0, 0, 0, 0]] = 2.0;
        batch[[0, 0, 0, 1]] = -1.0;
        let out = normalize_batch(&batch, &params(FitMode::SmartFill)).unwrap();
        assert_eq!(out.images[[0, 0, 0, 0]], 1.0);
        assert_eq!(out.images[[0, 0, 0, 1]], 0.0);
    }
}
