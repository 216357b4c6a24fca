//! JSON configuration and its merge with command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tagcloud_core::{types::Color, Point, Size};
use tagcloud_export::{ImageFormat, PngCompression, PngOptions};
use tagcloud_layout::LayoutOptions;
use tagcloud_render_2d::CloudStyle;

pub const DEFAULT_CANVAS: Size = Size::new(800, 600);

/// Contents of a `--config` file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloudConfig {
    pub canvas: Option<Size>,
    pub center: Option<Point>,
    pub sizes: Vec<Size>,
    pub style: StyleConfig,
    pub layout: LayoutConfig,
    /// `"fast"`, `"default"` or `"best"`.
    pub png_compression: Option<String>,
}

/// Style overrides; colors are hex strings such as `"#1e90ff"`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub background: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f32>,
    pub center_marker: Option<String>,
    pub marker_size: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub ring_step: Option<f64>,
    pub angle_step_degrees: Option<f64>,
    pub max_search_steps: Option<u64>,
}

impl CloudConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

impl StyleConfig {
    pub fn resolve(&self) -> Result<CloudStyle> {
        let mut style = CloudStyle::default();
        let color = |field: &str, value: &Option<String>, target: &mut Color| -> Result<()> {
            if let Some(hex) = value {
                *target = Color::from_hex(hex)
                    .with_context(|| format!("invalid {field} color {hex:?}"))?;
            }
            Ok(())
        };
        color("background", &self.background, &mut style.background)?;
        color("fill", &self.fill, &mut style.fill)?;
        color("stroke", &self.stroke, &mut style.stroke)?;
        color("center_marker", &self.center_marker, &mut style.center_marker)?;
        if let Some(width) = self.stroke_width {
            style.stroke_width = width;
        }
        if let Some(size) = self.marker_size {
            style.marker_size = size;
        }
        Ok(style)
    }
}

/// Values taken from the command line; `None`/empty means "not given".
#[derive(Debug, Default)]
pub struct Overrides {
    pub sizes: Vec<Size>,
    pub canvas: Option<Size>,
    pub center: Option<Point>,
    pub output: PathBuf,
    pub format: Option<ImageFormat>,
    pub max_search_steps: Option<u64>,
    pub png_compression: Option<PngCompression>,
}

/// Fully resolved run settings.
#[derive(Debug)]
pub struct Settings {
    pub sizes: Vec<Size>,
    pub canvas: Size,
    pub center: Point,
    pub output: PathBuf,
    pub format: ImageFormat,
    pub style: CloudStyle,
    pub layout: LayoutOptions,
    pub png: PngOptions,
}

impl Settings {
    /// Merge a config file with command-line overrides. Flags win.
    pub fn resolve(config: CloudConfig, overrides: Overrides) -> Result<Self> {
        let canvas = overrides.canvas.or(config.canvas).unwrap_or(DEFAULT_CANVAS);
        if !canvas.is_positive() {
            bail!("canvas must be positive, got {}x{}", canvas.width, canvas.height);
        }
        let center = overrides
            .center
            .or(config.center)
            .unwrap_or(Point::new(canvas.width / 2, canvas.height / 2));

        let mut sizes = config.sizes;
        sizes.extend(overrides.sizes);
        if sizes.is_empty() {
            bail!("no rectangle sizes given; use --size WxH or a config file");
        }

        let format = match overrides.format {
            Some(format) => format,
            None => ImageFormat::from_path(&overrides.output)?,
        };

        let defaults = LayoutOptions::default();
        let layout = LayoutOptions {
            ring_step: config.layout.ring_step.unwrap_or(defaults.ring_step),
            angle_step: config
                .layout
                .angle_step_degrees
                .map(f64::to_radians)
                .unwrap_or(defaults.angle_step),
            max_search_steps: overrides
                .max_search_steps
                .or(config.layout.max_search_steps),
        };

        let compression = match (overrides.png_compression, &config.png_compression) {
            (Some(compression), _) => compression,
            (None, Some(name)) => parse_compression(name)
                .map_err(anyhow::Error::msg)
                .context("invalid png_compression in config")?,
            (None, None) => PngCompression::default(),
        };

        Ok(Self {
            sizes,
            canvas,
            center,
            output: overrides.output,
            format,
            style: config.style.resolve()?,
            layout,
            png: PngOptions { compression },
        })
    }
}

/// Parse `WIDTHxHEIGHT`, e.g. `40x12`.
pub fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
    Ok(Size::new(width, height))
}

/// Parse a PNG compression level: `fast`, `default` or `best`.
pub fn parse_compression(s: &str) -> Result<PngCompression, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "fast" => Ok(PngCompression::Fast),
        "default" => Ok(PngCompression::Default),
        "best" => Ok(PngCompression::Best),
        _ => Err(format!("expected fast, default or best, got {s:?}")),
    }
}

/// Parse `X,Y`, e.g. `400,300` or `-10,5`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x {x:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y {y:?}: {e}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(output: &str) -> Overrides {
        Overrides {
            output: PathBuf::from(output),
            ..Overrides::default()
        }
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("40x12"), Ok(Size::new(40, 12)));
        assert_eq!(parse_size("7X3"), Ok(Size::new(7, 3)));
        assert!(parse_size("40").is_err());
        assert!(parse_size("ax3").is_err());
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("400,300"), Ok(Point::new(400, 300)));
        assert_eq!(parse_point("-10, 5"), Ok(Point::new(-10, 5)));
        assert!(parse_point("1;2").is_err());
    }

    #[test]
    fn test_parse_compression() {
        assert_eq!(parse_compression("Best"), Ok(PngCompression::Best));
        assert_eq!(parse_compression("fast"), Ok(PngCompression::Fast));
        assert!(parse_compression("max").is_err());
    }

    #[test]
    fn test_png_compression_from_config_and_flags() {
        let config = CloudConfig::from_json(
            r#"{"sizes": [{"width": 2, "height": 2}], "png_compression": "fast"}"#,
        )
        .unwrap();
        let settings = Settings::resolve(config, overrides("cloud.png")).unwrap();
        assert_eq!(settings.png.compression, PngCompression::Fast);

        let config = CloudConfig::from_json(
            r#"{"sizes": [{"width": 2, "height": 2}], "png_compression": "fast"}"#,
        )
        .unwrap();
        let flags = Overrides {
            png_compression: Some(PngCompression::Best),
            ..overrides("cloud.png")
        };
        let settings = Settings::resolve(config, flags).unwrap();
        assert_eq!(settings.png.compression, PngCompression::Best);

        let config = CloudConfig::from_json(
            r#"{"sizes": [{"width": 2, "height": 2}], "png_compression": "tiny"}"#,
        )
        .unwrap();
        assert!(Settings::resolve(config, overrides("cloud.png")).is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config = CloudConfig::from_json(
            r##"{
                "canvas": {"width": 300, "height": 200},
                "sizes": [{"width": 10, "height": 5}, {"width": 3, "height": 3}],
                "style": {"fill": "#00ff00"},
                "layout": {"angle_step_degrees": 10.0}
            }"##,
        )
        .unwrap();
        assert_eq!(config.canvas, Some(Size::new(300, 200)));
        assert_eq!(config.sizes.len(), 2);

        let settings = Settings::resolve(config, overrides("cloud.svg")).unwrap();
        assert_eq!(settings.center, Point::new(150, 100));
        assert_eq!(settings.format, ImageFormat::Svg);
        assert_eq!(settings.style.fill, Color::rgb(0.0, 1.0, 0.0));
        assert!((settings.layout.angle_step - 10f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(CloudConfig::from_json(r#"{"sizes": [], "colour": "red"}"#).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = CloudConfig {
            canvas: Some(Size::new(300, 200)),
            center: Some(Point::new(1, 1)),
            sizes: vec![Size::new(4, 4)],
            ..CloudConfig::default()
        };
        let flags = Overrides {
            sizes: vec![Size::new(9, 9)],
            canvas: Some(Size::new(50, 40)),
            center: Some(Point::new(20, 20)),
            format: Some(ImageFormat::Png),
            max_search_steps: Some(100),
            ..overrides("out.svg")
        };
        let settings = Settings::resolve(config, flags).unwrap();
        assert_eq!(settings.canvas, Size::new(50, 40));
        assert_eq!(settings.center, Point::new(20, 20));
        assert_eq!(settings.sizes, vec![Size::new(4, 4), Size::new(9, 9)]);
        assert_eq!(settings.format, ImageFormat::Png);
        assert_eq!(settings.layout.max_search_steps, Some(100));
    }

    #[test]
    fn test_defaults() {
        let flags = Overrides {
            sizes: vec![Size::new(2, 2)],
            ..overrides("cloud.png")
        };
        let settings = Settings::resolve(CloudConfig::default(), flags).unwrap();
        assert_eq!(settings.canvas, DEFAULT_CANVAS);
        assert_eq!(settings.center, Point::new(400, 300));
        assert_eq!(settings.style, CloudStyle::default());
        assert_eq!(settings.layout, LayoutOptions::default());
        assert_eq!(settings.png, PngOptions::default());
    }

    #[test]
    fn test_missing_sizes_rejected() {
        let err = Settings::resolve(CloudConfig::default(), overrides("cloud.png")).unwrap_err();
        assert!(err.to_string().contains("no rectangle sizes"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let style = StyleConfig {
            stroke: Some("#nothex".to_string()),
            ..StyleConfig::default()
        };
        let err = style.resolve().unwrap_err();
        assert!(err.to_string().contains("stroke"));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let flags = Overrides {
            sizes: vec![Size::new(2, 2)],
            ..overrides("cloud.bmp")
        };
        assert!(Settings::resolve(CloudConfig::default(), flags).is_err());
    }
}
