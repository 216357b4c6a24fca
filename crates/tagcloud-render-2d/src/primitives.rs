//! Render primitives for 2D rendering.
//!
//! A [`Scene`] is an ordered list of commands; later commands paint over
//! earlier ones.

use tagcloud_core::types::Color;

/// A render command representing something to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw an axis-aligned rectangle
    Rect(RectPrimitive),
    /// Draw an ellipse/circle
    Ellipse(EllipsePrimitive),
}

/// A rectangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// An ellipse primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipsePrimitive {
    pub center_x: f32,
    pub center_y: f32,
    pub radius_x: f32,
    pub radius_y: f32,
    pub fill: Option<Color>,
}

impl EllipsePrimitive {
    pub fn circle(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self::ellipse(center_x, center_y, radius, radius)
    }

    pub fn ellipse(center_x: f32, center_y: f32, radius_x: f32, radius_y: f32) -> Self {
        Self {
            center_x,
            center_y,
            radius_x,
            radius_y,
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// Outline drawn just inside a shape's edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A complete scene ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub commands: Vec<RenderCommand>,
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            commands: Vec::new(),
            width,
            height,
            background,
        }
    }

    pub fn rect(&mut self, rect: RectPrimitive) {
        self.commands.push(RenderCommand::Rect(rect));
    }

    pub fn ellipse(&mut self, ellipse: EllipsePrimitive) {
        self.commands.push(RenderCommand::Ellipse(ellipse));
    }
}
