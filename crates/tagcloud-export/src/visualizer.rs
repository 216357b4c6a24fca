//! Rendering collaborator that turns placed rectangles into image files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tagcloud_core::{ExportError, Rectangle, RenderError, Size};
use tagcloud_render_2d::{append_rectangles, CloudStyle, Scene};

use crate::png::{self, PngOptions};
use crate::svg;

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ExportError::UnsupportedFormat {
                format: path.display().to_string(),
            })?;
        ext.parse()
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(ExportError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Accepts placed rectangles and persists a picture of them.
pub trait CloudVisualizer {
    /// Draw rectangles given in placement order. The first one's center is
    /// marked as the cloud center.
    fn add_rectangles(&mut self, rectangles: &[Rectangle]);

    /// Write the picture to `path` in `format`.
    fn save(&self, path: &Path, format: ImageFormat) -> Result<(), ExportError>;
}

/// Visualizer drawing into a fixed-size canvas.
#[derive(Debug, Clone)]
pub struct BitmapVisualizer {
    scene: Scene,
    style: CloudStyle,
    png_options: PngOptions,
}

impl BitmapVisualizer {
    /// Create a visualizer with a `canvas` sized canvas.
    pub fn new(canvas: Size, style: CloudStyle) -> Result<Self, RenderError> {
        if !canvas.is_positive() {
            return Err(RenderError::EmptyCanvas {
                width: canvas.width.max(0) as u32,
                height: canvas.height.max(0) as u32,
            });
        }
        Ok(Self {
            scene: Scene::new(canvas.width as u32, canvas.height as u32, style.background),
            style,
            png_options: PngOptions::default(),
        })
    }

    /// Use `options` when saving as PNG.
    pub fn with_png_options(mut self, options: PngOptions) -> Self {
        self.png_options = options;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Encode the current picture without writing it anywhere.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, ExportError> {
        match format {
            ImageFormat::Png => png::export_with_options(&self.scene, &self.png_options),
            ImageFormat::Svg => Ok(svg::export(&self.scene).into_bytes()),
        }
    }
}

impl CloudVisualizer for BitmapVisualizer {
    fn add_rectangles(&mut self, rectangles: &[Rectangle]) {
        append_rectangles(&mut self.scene, rectangles, &self.style);
    }

    fn save(&self, path: &Path, format: ImageFormat) -> Result<(), ExportError> {
        let bytes = self.encode(format)?;
        std::fs::write(path, &bytes)?;
        tracing::info!(
            path = %path.display(),
            %format,
            bytes = bytes.len(),
            "saved cloud image"
        );
        Ok(())
    }
}
