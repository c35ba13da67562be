//! # watermark
//!
//! Fit-and-draw text watermarks for images.
//!
//! The heavy lifting lives in the `textfit` crate (font-size search) and the
//! `textfit-cosmic` crate (shaping and CPU compositing). This crate supplies
//! the operation layer around them: an [`ImageOperation`] trait for pipeline
//! steps that transform an image and derive an output path, and the
//! [`WatermarkOperation`] implementation.

mod operation;
mod paths;

pub use operation::*;
pub use paths::*;
