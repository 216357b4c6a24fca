//! Error types for the tag cloud engine.

use thiserror::Error;

/// Errors raised by the placement engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Rectangle width and height must be greater than 0, got {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Invalid layout options: {reason}")]
    InvalidOptions { reason: String },

    #[error("No free location found after {steps} spiral steps")]
    SearchExhausted { steps: u64 },
}

/// Errors during rasterization.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Canvas must have a positive area, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Errors during image export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported output format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Encoding failed: {reason}")]
    EncodeFailed { reason: String },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
