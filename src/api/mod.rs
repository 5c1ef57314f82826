//! High-level, ergonomic library API: normalize in-memory batches, single
//! image files, or whole directories. Prefer these entrypoints over the
//! low-level `core` modules when integrating RESNORM.
use std::path::Path;

use tracing::{info, warn};

use crate::core::geometry;
use crate::core::params::NormalizeParams;
use crate::core::pixel::PixelImage;
use crate::core::strategy;
use crate::error::{Error, Result};

pub use crate::core::batch::{NormalizedBatch, normalize_batch};

/// Normalize one image file and write the result to `output` (format chosen
/// by its extension). Returns the target dimensions.
pub fn normalize_file_to_path(
    input: &Path,
    output: &Path,
    params: &NormalizeParams,
) -> Result<(usize, usize)> {
    let decoded = image::open(input)
        .map_err(|e| Error::Image(e.to_string()))?
        .to_rgb8();
    let (w, h) = decoded.dimensions();
    let src = PixelImage::from_raw(w as usize, h as usize, decoded.into_raw())?;

    let (target_w, target_h) =
        geometry::target_dimensions(src.width(), src.height(), params.round_to_multiple);
    let out = strategy::apply_fit(&src, target_w, target_h, params.fit, params.method)?;

    let encoded = image::RgbImage::from_raw(
        out.width() as u32,
        out.height() as u32,
        out.into_raw(),
    )
    .ok_or_else(|| Error::Image("output buffer did not match its dimensions".to_string()))?;
    encoded
        .save(output)
        .map_err(|e| Error::Image(e.to_string()))?;

    Ok((target_w, target_h))
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp", "tif", "tiff"];

fn has_raster_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| RASTER_EXTENSIONS.iter().any(|r| e.eq_ignore_ascii_case(r)))
}

/// Normalize every recognized raster file in `input_dir` into `output_dir`
/// under the same file name.
/// If `continue_on_error` is true, per-file errors are logged and counted in
/// the report; otherwise, the first error is returned.
pub fn normalize_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &NormalizeParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    let mut report = BatchReport::default();

    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if !path.is_file() || !has_raster_extension(&path) {
            report.skipped += 1;
            continue;
        }
        let Some(file_name) = path.file_name() else {
            report.skipped += 1;
            continue;
        };
        let output_path = output_dir.join(file_name);

        match normalize_file_to_path(&path, &output_path, params) {
            Ok((w, h)) => {
                info!("Normalized {:?} -> {:?} ({}x{})", path, output_path, w, h);
                report.processed += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error normalizing {:?}: {}", path, e);
            }
        }
    }

    Ok(report)
}
