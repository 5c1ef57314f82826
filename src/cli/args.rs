use clap::Parser;
use std::path::PathBuf;

use resnorm::{FitMode, ResampleMethod, RoundingMultiple};

#[derive(Parser)]
#[command(name = "resnorm", version, about = "RESNORM CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing image files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Fit strategy (fill, letterbox, crop, smart-fill)
    #[arg(long, value_enum, default_value_t = FitMode::SmartFill)]
    pub fit: FitMode,

    /// Resampling kernel (lanczos, bicubic, hamming, bilinear, box, nearest)
    #[arg(long, value_enum)]
    pub method: ResampleMethod,

    /// Divisor the output width and height must be multiples of
    #[arg(long, value_enum, default_value_t = RoundingMultiple::M16)]
    pub round_to_multiple: RoundingMultiple,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
