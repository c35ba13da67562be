use std::path::{Path, PathBuf};

use image::RgbaImage;
use textfit::{
    fit, Canvas, Color, FitError, FontDescriptor, RenderRequest, TextMeasurer, TextRenderer,
    WrapMode,
};
use thiserror::Error;

use crate::paths::watermark_path;

/// Errors from applying an image operation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Fit(#[from] FitError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// A pipeline step that transforms an image and names its output.
///
/// Operations form an open set: watermarking is one variant, and new
/// variants only need to implement this trait. `E` is the text engine the
/// operation may draw with; operations that do not render text simply ignore
/// it.
pub trait ImageOperation<E> {
    /// Apply the operation, consuming and returning the image.
    fn apply(&self, engine: &mut E, image: RgbaImage) -> Result<RgbaImage, OperationError>;

    /// Derive the output path for this operation from the input path.
    fn derive_path(&self, path: &Path) -> PathBuf;
}

/// Draws a block of text scaled to fill the image.
#[derive(Debug, Clone)]
pub struct WatermarkOperation {
    pub text: String,
    pub font: FontDescriptor,
    pub color: Color,
    pub padding: f32,
    pub mode: WrapMode,
}

impl WatermarkOperation {
    /// Create a watermark with the default white color, padding of 5 pixels
    /// and word-wrap fitting.
    pub fn new(text: impl Into<String>, font: FontDescriptor) -> Self {
        Self {
            text: text.into(),
            font,
            color: Color::WHITE,
            padding: 5.0,
            mode: WrapMode::WordWrap,
        }
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the padding in pixels
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the layout mode
    pub fn with_mode(mut self, mode: WrapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Output path for this watermark; also exposed through
    /// [`ImageOperation::derive_path`].
    pub fn output_path(&self, path: &Path) -> PathBuf {
        watermark_path(path, &self.text)
    }
}

impl<E> ImageOperation<E> for WatermarkOperation
where
    E: TextMeasurer + TextRenderer<Target = RgbaImage>,
{
    fn apply(&self, engine: &mut E, image: RgbaImage) -> Result<RgbaImage, OperationError> {
        let canvas = Canvas::new(image.width(), image.height());
        let result = fit(engine, canvas, self.padding, &self.text, &self.font, self.mode)?;

        log::debug!(
            "watermark fit: size {:.2} -> {:.2}, wrap {:?}, converged: {}",
            self.font.size,
            result.font.size,
            result.wrap_width,
            result.converged(),
        );

        Ok(engine.render_text(
            image,
            RenderRequest {
                text: &self.text,
                font: &result.font,
                color: self.color,
                anchor: result.anchor,
                wrap_width: result.wrap_width,
            },
        ))
    }

    fn derive_path(&self, path: &Path) -> PathBuf {
        self.output_path(path)
    }
}
