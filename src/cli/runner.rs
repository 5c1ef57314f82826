use tracing::info;

use resnorm::NormalizeParams;
use resnorm::api::{normalize_directory_to_path, normalize_file_to_path};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = NormalizeParams {
        fit: args.fit,
        method: args.method,
        round_to_multiple: args.round_to_multiple,
    };

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report =
            normalize_directory_to_path(&input_dir, &output_dir, &params, true)
                .map_err(AppError::from)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        let (width, height) =
            normalize_file_to_path(&input, &output, &params).map_err(AppError::from)?;
        info!(
            "Successfully processed: {:?} -> {:?} ({}x{})\n",
            input, output, width, height
        );
    }

    Ok(())
}
