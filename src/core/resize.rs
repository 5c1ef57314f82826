//! Resampling over `fast_image_resize` for interleaved RGB8 buffers.

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};

use crate::core::pixel::PixelImage;
use crate::error::{Error, Result};
use crate::types::ResampleMethod;

fn resize_alg(method: ResampleMethod) -> ResizeAlg {
    match method {
        ResampleMethod::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
        ResampleMethod::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleMethod::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
        ResampleMethod::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleMethod::Box => ResizeAlg::Convolution(FilterType::Box),
        ResampleMethod::Nearest => ResizeAlg::Nearest,
    }
}

/// Resample to `target_w x target_h` with the selected kernel.
/// A source already at the target size is returned as-is, since a 1:1
/// convolution pass is not bit-exact.
pub fn resample(
    src: &PixelImage,
    target_w: usize,
    target_h: usize,
    method: ResampleMethod,
) -> Result<PixelImage> {
    if src.width() == target_w && src.height() == target_h {
        return Ok(src.clone());
    }

    let resize_options = ResizeOptions::new().resize_alg(resize_alg(method));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src.width() as u32,
        src.height() as u32,
        src.data().to_vec(),
        PixelType::U8x3,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_w as u32, target_h as u32, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    PixelImage::from_raw(target_w, target_h, dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, rgb: [u8; 3]) -> PixelImage {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        PixelImage::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn same_size_is_identity() {
        let img = solid(8, 6, [10, 20, 30]);
        let out = resample(&img, 8, 6, ResampleMethod::Lanczos).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn solid_color_survives_every_kernel() {
        let img = solid(10, 5, [200, 100, 50]);
        for method in [
            ResampleMethod::Lanczos,
            ResampleMethod::Bicubic,
            ResampleMethod::Hamming,
            ResampleMethod::Bilinear,
            ResampleMethod::Box,
            ResampleMethod::Nearest,
        ] {
            let out = resample(&img, 16, 16, method).unwrap();
            assert_eq!(out.width(), 16);
            assert_eq!(out.height(), 16);
            // Fixed-point weight normalization may drift by one step
            for y in 0..16 {
                for x in 0..16 {
                    let px = out.pixel(x, y);
                    for (got, want) in px.iter().zip([200u8, 100, 50]) {
                        assert!(
                            got.abs_diff(want) <= 1,
                            "method={method} at ({x},{y}): {px:?}"
                        );
                    }
                }
            }
        }
    }
}
