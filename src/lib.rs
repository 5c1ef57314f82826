#![doc = r#"
RESNORM — an image resolution normalizer for shape-constrained models.

This crate takes batches of RGB images and produces batches whose width and
height are exact multiples of a chosen divisor, as required by models with
strict input-shape constraints. Target dimensions are computed by ceiling
rounding (never below the source size), and one of four fit strategies
reconciles the source aspect ratio with the target box:

- `fill` — stretch to target, independent axis scales (aspect may distort)
- `letterbox` — scale to fit, pad the remainder with black bars
- `crop` — scale to cover, crop the centered excess
- `smart_fill` — scale to fit, synthesize the border by mirror reflection
  (reflect-101, so no visible seam at the content boundary)

It powers the RESNORM CLI and can be embedded in your own Rust pipelines.

Quick start: normalize an in-memory batch
-----------------------------------------
Batches are `ndarray` tensors shaped `[N, H, W, 3]` with values in `[0, 1]`.

```rust
use ndarray::Array4;
use resnorm::{normalize_batch, FitMode, NormalizeParams, ResampleMethod, RoundingMultiple};

fn main() -> resnorm::Result<()> {
    let batch = Array4::<f32>::zeros((2, 50, 100, 3));

    let out = normalize_batch(
        &batch,
        &NormalizeParams {
            fit: FitMode::Letterbox,
            method: ResampleMethod::Bilinear,
            round_to_multiple: RoundingMultiple::M16,
        },
    )?;

    assert_eq!((out.width, out.height), (112, 64));
    assert_eq!(out.images.dim(), (2, 64, 112, 3));
    Ok(())
}
```

Normalize image files
---------------------
```rust,no_run
use std::path::Path;
use resnorm::{normalize_directory_to_path, normalize_file_to_path, NormalizeParams};

fn main() -> resnorm::Result<()> {
    let params = NormalizeParams::default(); // smart_fill, lanczos, multiple 16

    let (w, h) = normalize_file_to_path(
        Path::new("/data/photo.png"),
        Path::new("/out/photo.png"),
        &params,
    )?;
    println!("normalized to {w}x{h}");

    let report = normalize_directory_to_path(
        Path::new("/data/images"),
        Path::new("/out"),
        &params,
        true, // continue_on_error
    )?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `resnorm::Result<T>`; match on `resnorm::Error`
for specific cases. Configuration problems (a rounding multiple outside the
allowed set) and input problems (empty batch, zero-sized image, malformed
buffer) are surfaced before any per-image work; there is no partial-batch
success.

Useful modules
--------------
- [`api`] — high-level entry points for batches, files, and directories.
- [`types`] — the `FitMode`, `ResampleMethod`, and `RoundingMultiple` enums.
- [`core`] — low-level geometry, resampling, and border-fill primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use core::params::NormalizeParams;
pub use core::pixel::PixelImage;
pub use error::{Error, Result};
pub use types::{ALLOWED_MULTIPLES, FitMode, ResampleMethod, RoundingMultiple};

// High-level API re-exports
pub use api::{
    BatchReport, NormalizedBatch, normalize_batch, normalize_directory_to_path,
    normalize_file_to_path,
};
