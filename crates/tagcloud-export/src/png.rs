//! PNG export for rendered clouds.

use tagcloud_core::ExportError;
use tagcloud_render_2d::{Scene, SoftwareRenderer};

/// Compression effort for PNG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<PngCompression> for png::Compression {
    fn from(value: PngCompression) -> Self {
        match value {
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Default => png::Compression::Default,
            PngCompression::Best => png::Compression::Best,
        }
    }
}

/// Export options for PNG.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PngOptions {
    pub compression: PngCompression,
}

/// Render a scene and encode it as PNG.
pub fn export(scene: &Scene) -> Result<Vec<u8>, ExportError> {
    export_with_options(scene, &PngOptions::default())
}

/// Render a scene and encode it as PNG with custom options.
pub fn export_with_options(scene: &Scene, options: &PngOptions) -> Result<Vec<u8>, ExportError> {
    let mut renderer = SoftwareRenderer::new(scene.width, scene.height)?;
    let pixels = renderer.render(scene)?;
    encode_png(pixels, scene.width, scene.height, options)
}

/// Encode raw RGBA pixels as PNG.
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &PngOptions,
) -> Result<Vec<u8>, ExportError> {
    let mut output = Vec::new();

    let mut encoder = png::Encoder::new(&mut output, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(options.compression.into());

    let mut writer = encoder.write_header().map_err(encode_failed)?;
    writer.write_image_data(pixels).map_err(encode_failed)?;
    writer.finish().map_err(encode_failed)?;

    Ok(output)
}

fn encode_failed(err: png::EncodingError) -> ExportError {
    ExportError::EncodeFailed {
        reason: err.to_string(),
    }
}
