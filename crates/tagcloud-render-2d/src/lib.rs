//! 2D rendering for tag clouds.
//!
//! Placed rectangles become a [`Scene`] of draw commands, which the
//! [`SoftwareRenderer`] rasterizes into an RGBA8 pixel buffer.

pub mod primitives;
pub mod scene;
pub mod style;

pub use primitives::*;
pub use scene::{append_rectangles, build_scene};
pub use style::CloudStyle;

use tagcloud_core::{types::Color, RenderError};

/// Software rasterizer for headless rendering.
#[derive(Debug, Clone)]
pub struct SoftwareRenderer {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl SoftwareRenderer {
    /// Create a new software renderer with the given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            buffer: vec![255; width as usize * height as usize * 4], // RGBA, white background
        })
    }

    /// Clear the buffer to a solid color.
    pub fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        for chunk in self.buffer.chunks_exact_mut(4) {
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
            chunk[3] = a;
        }
    }

    /// Render a scene, replacing the previous buffer contents.
    ///
    /// Shapes are clipped to the canvas.
    pub fn render(&mut self, scene: &Scene) -> Result<&[u8], RenderError> {
        if scene.width != self.width || scene.height != self.height {
            *self = Self::new(scene.width, scene.height)?;
        }

        let (r, g, b, a) = scene.background.to_rgba8();
        self.clear(r, g, b, a);

        for command in &scene.commands {
            match command {
                RenderCommand::Rect(rect) => self.draw_rect(rect),
                RenderCommand::Ellipse(ellipse) => self.draw_ellipse(ellipse),
            }
        }

        tracing::trace!(
            commands = scene.commands.len(),
            width = self.width,
            height = self.height,
            "rendered scene"
        );

        Ok(&self.buffer)
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) {
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);

        if let Some(fill) = rect.fill {
            self.fill_span(x0, y0, x1, y1, fill);
        }

        if let Some(stroke) = rect.stroke {
            // Inset so the outline never spills outside the rectangle.
            let t = stroke.width.min(rect.width / 2.0).min(rect.height / 2.0);
            if t > 0.0 {
                self.fill_span(x0, y0, x1, y0 + t, stroke.color);
                self.fill_span(x0, y1 - t, x1, y1, stroke.color);
                self.fill_span(x0, y0 + t, x0 + t, y1 - t, stroke.color);
                self.fill_span(x1 - t, y0 + t, x1, y1 - t, stroke.color);
            }
        }
    }

    fn draw_ellipse(&mut self, ellipse: &EllipsePrimitive) {
        let Some(fill) = ellipse.fill else {
            return;
        };
        if ellipse.radius_x <= 0.0 || ellipse.radius_y <= 0.0 {
            return;
        }

        let (px0, py0, px1, py1) = self.pixel_range(
            ellipse.center_x - ellipse.radius_x,
            ellipse.center_y - ellipse.radius_y,
            ellipse.center_x + ellipse.radius_x,
            ellipse.center_y + ellipse.radius_y,
        );

        for py in py0..py1 {
            for px in px0..px1 {
                let dx = (px as f32 + 0.5 - ellipse.center_x) / ellipse.radius_x;
                let dy = (py as f32 + 0.5 - ellipse.center_y) / ellipse.radius_y;
                if dx * dx + dy * dy <= 1.0 {
                    self.blend_pixel(px, py, fill);
                }
            }
        }
    }

    /// Fill every pixel whose center lies in `[x0, x1) x [y0, y1)`.
    fn fill_span(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let (px0, py0, px1, py1) = self.pixel_range(x0, y0, x1, y1);
        for py in py0..py1 {
            for px in px0..px1 {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Pixel index range covering pixel centers inside the box, clipped.
    fn pixel_range(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> (u32, u32, u32, u32) {
        let clip = |v: f32, max: u32| (v - 0.5).ceil().clamp(0.0, max as f32) as u32;
        (
            clip(x0, self.width),
            clip(y0, self.height),
            clip(x1, self.width),
            clip(y1, self.height),
        )
    }

    /// Alpha blend a color onto one pixel.
    fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let Some(pixel) = self.buffer.get_mut(idx..idx + 4) else {
            return;
        };

        let a = color.a.clamp(0.0, 1.0);
        let blend = |src: f32, dst: u8| {
            let dst = dst as f32 / 255.0;
            ((src.clamp(0.0, 1.0) * a + dst * (1.0 - a)) * 255.0).round() as u8
        };
        pixel[0] = blend(color.r, pixel[0]);
        pixel[1] = blend(color.g, pixel[1]);
        pixel[2] = blend(color.b, pixel[2]);
        let dst_a = pixel[3] as f32 / 255.0;
        pixel[3] = ((a + dst_a * (1.0 - a)) * 255.0).round() as u8;
    }

    /// Get the buffer width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a reference to the raw pixel buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// RGBA value of one pixel, if it is on the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.buffer
            .get(idx..idx + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcloud_core::Rectangle;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn test_software_renderer_new() {
        let renderer = SoftwareRenderer::new(100, 100).unwrap();
        assert_eq!(renderer.width(), 100);
        assert_eq!(renderer.height(), 100);
        assert_eq!(renderer.buffer().len(), 100 * 100 * 4);
    }

    #[test]
    fn test_empty_canvas_rejected() {
        assert!(matches!(
            SoftwareRenderer::new(0, 10),
            Err(RenderError::EmptyCanvas { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_software_renderer_clear() {
        let mut renderer = SoftwareRenderer::new(10, 10).unwrap();
        renderer.clear(255, 0, 0, 255); // Red
        assert_eq!(renderer.pixel(0, 0), Some(RED));
        assert_eq!(renderer.pixel(9, 9), Some(RED));
        assert_eq!(renderer.pixel(10, 0), None);
    }

    #[test]
    fn test_render_filled_and_outlined_rect() {
        let mut renderer = SoftwareRenderer::new(40, 40).unwrap();
        let scene = build_scene(
            &[Rectangle::from_xywh(10, 10, 10, 10)],
            40,
            40,
            &CloudStyle {
                marker_size: 0.0,
                ..CloudStyle::default()
            },
        );
        renderer.render(&scene).unwrap();

        assert_eq!(renderer.pixel(15, 15), Some(BLUE));
        assert_eq!(renderer.pixel(10, 10), Some(BLACK));
        assert_eq!(renderer.pixel(19, 15), Some(BLACK));
        assert_eq!(renderer.pixel(20, 15), Some(WHITE));
        assert_eq!(renderer.pixel(9, 9), Some(WHITE));
    }

    #[test]
    fn test_center_marker_drawn_on_top() {
        let mut renderer = SoftwareRenderer::new(40, 40).unwrap();
        let scene = build_scene(
            &[Rectangle::from_xywh(10, 10, 10, 10)],
            40,
            40,
            &CloudStyle::default(),
        );
        renderer.render(&scene).unwrap();

        // Rectangle center is (15, 15); a 2px dot covers the four pixels around it.
        for (x, y) in [(14, 14), (15, 14), (14, 15), (15, 15)] {
            assert_eq!(renderer.pixel(x, y), Some(RED), "pixel ({x}, {y})");
        }
        assert_eq!(renderer.pixel(16, 15), Some(BLUE));
    }

    #[test]
    fn test_shapes_are_clipped() {
        let mut renderer = SoftwareRenderer::new(10, 10).unwrap();
        let scene = build_scene(
            &[Rectangle::from_xywh(-20, -20, 25, 25)],
            10,
            10,
            &CloudStyle::default(),
        );
        renderer.render(&scene).unwrap();
        assert_eq!(renderer.pixel(0, 0), Some(BLUE));
        assert_eq!(renderer.pixel(5, 5), Some(WHITE));
    }

    #[test]
    fn test_render_resizes_to_scene() {
        let mut renderer = SoftwareRenderer::new(10, 10).unwrap();
        let scene = Scene::new(20, 5, tagcloud_core::types::Color::BLACK);
        let pixels = renderer.render(&scene).unwrap();
        assert_eq!(pixels.len(), 20 * 5 * 4);
        assert_eq!(renderer.pixel(19, 4), Some(BLACK));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut renderer = SoftwareRenderer::new(4, 4).unwrap();
        let mut scene = Scene::new(4, 4, tagcloud_core::types::Color::WHITE);
        scene.rect(RectPrimitive::new(0.0, 0.0, 4.0, 4.0).with_fill(
            tagcloud_core::types::Color::rgba(0.0, 0.0, 0.0, 0.5),
        ));
        renderer.render(&scene).unwrap();
        assert_eq!(renderer.pixel(1, 1), Some([128, 128, 128, 255]));
    }
}
