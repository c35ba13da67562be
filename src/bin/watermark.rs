//! Command-line watermarker: fits the given text to an image and saves the
//! result next to the input.
//!
//! Usage: `watermark <input> <text> [output]`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use textfit::{FontDescriptor, FontFamily};
use textfit_cosmic::CosmicEngine;
use watermark::{ImageOperation, OperationError, WatermarkOperation};

/// Starting point for the size search; the fit scales it to the image.
const INITIAL_FONT_SIZE: f32 = 64.0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, text, output) = match args.as_slice() {
        [input, text] => (PathBuf::from(input), text.clone(), None),
        [input, text, output] => (PathBuf::from(input), text.clone(), Some(PathBuf::from(output))),
        _ => {
            eprintln!("usage: watermark <input> <text> [output]");
            return ExitCode::FAILURE;
        }
    };

    match run(&input, &text, output.as_deref()) {
        Ok(path) => {
            log::info!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("watermarking failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, text: &str, output: Option<&Path>) -> Result<PathBuf, OperationError> {
    let image = image::open(input)?.into_rgba8();
    log::info!(
        "loaded {} ({}x{})",
        input.display(),
        image.width(),
        image.height()
    );

    let mut engine = CosmicEngine::new();
    let font = FontDescriptor::new(FontFamily::SansSerif, INITIAL_FONT_SIZE);
    let operation = WatermarkOperation::new(text, font);

    let out_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| operation.output_path(input));

    let result = operation.apply(&mut engine, image)?;
    result.save(&out_path)?;

    Ok(out_path)
}
