//! Export formats for tag clouds.
//!
//! Supported formats:
//! - PNG (raster, via the software renderer)
//! - SVG (vector)
//!
//! [`BitmapVisualizer`] implements the [`CloudVisualizer`] capability used by
//! callers that only hold placed rectangles.

pub mod png;
pub mod svg;
mod visualizer;

pub use png::{PngCompression, PngOptions};
pub use visualizer::{BitmapVisualizer, CloudVisualizer, ImageFormat};

use tagcloud_core::ExportError;
use tagcloud_render_2d::Scene;

/// Export a scene to PNG.
pub fn export_png(scene: &Scene) -> Result<Vec<u8>, ExportError> {
    png::export(scene)
}

/// Export a scene to PNG with custom options.
pub fn export_png_with_options(scene: &Scene, options: &PngOptions) -> Result<Vec<u8>, ExportError> {
    png::export_with_options(scene, options)
}

/// Export a scene to SVG.
pub fn export_svg(scene: &Scene) -> String {
    svg::export(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcloud_render_2d::{build_scene, CloudStyle};

    #[test]
    fn test_export_svg() {
        let scene = build_scene(&[], 10, 10, &CloudStyle::default());
        assert!(export_svg(&scene).contains("<svg"));
    }

    #[test]
    fn test_export_png() {
        let scene = build_scene(&[], 10, 10, &CloudStyle::default());
        assert!(export_png(&scene).is_ok());
    }

    #[test]
    fn test_export_png_zero_canvas() {
        let scene = build_scene(&[], 0, 10, &CloudStyle::default());
        assert!(matches!(export_png(&scene), Err(ExportError::Render(_))));
    }
}
