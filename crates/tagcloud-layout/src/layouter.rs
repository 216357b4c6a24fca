//! The circular cloud placement engine.

use std::f64::consts::TAU;

use tagcloud_core::{LayoutError, Point, Rectangle, Size};

use crate::compress::compress;
use crate::spiral::{SpiralCursor, ANGLE_STEP, RING_STEP};

/// Places rectangles one at a time, never overlapping earlier placements.
pub trait CloudLayouter {
    /// Choose a location for a rectangle of `size` and record it.
    fn place(&mut self, size: Size) -> Result<Rectangle, LayoutError>;

    /// All rectangles placed so far, in placement order.
    fn placed_rectangles(&self) -> &[Rectangle];
}

/// Tuning for the spiral search.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Radial distance between consecutive spiral rings.
    pub ring_step: f64,
    /// Angle increment between candidates on one ring, in radians.
    pub angle_step: f64,
    /// Give up after this many consecutive overlapping candidates.
    /// `None` searches until free space is found.
    pub max_search_steps: Option<u64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            ring_step: RING_STEP,
            angle_step: ANGLE_STEP,
            max_search_steps: None,
        }
    }
}

impl LayoutOptions {
    /// Check that the search can make progress with these options.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.ring_step.is_finite() || self.ring_step <= 0.0 {
            return Err(LayoutError::InvalidOptions {
                reason: format!("ring_step must be positive, got {}", self.ring_step),
            });
        }
        if !self.angle_step.is_finite() || self.angle_step <= 0.0 || self.angle_step > TAU {
            return Err(LayoutError::InvalidOptions {
                reason: format!("angle_step must be in (0, 2π], got {}", self.angle_step),
            });
        }
        if self.max_search_steps == Some(0) {
            return Err(LayoutError::InvalidOptions {
                reason: "max_search_steps must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Packs rectangles around a fixed center along an outward spiral.
///
/// The first rectangle is centered on the center point. Every later one is
/// placed at the first free spiral position, then compressed toward the
/// center along X and then Y.
#[derive(Debug, Clone)]
pub struct CircularCloudLayouter {
    center: Point,
    options: LayoutOptions,
    cursor: SpiralCursor,
    rectangles: Vec<Rectangle>,
}

impl CircularCloudLayouter {
    /// Create a layouter with the default spiral options.
    pub fn new(center: Point) -> Self {
        Self {
            center,
            options: LayoutOptions::default(),
            cursor: SpiralCursor::new(),
            rectangles: Vec::new(),
        }
    }

    /// Create a layouter with custom spiral options.
    pub fn with_options(center: Point, options: LayoutOptions) -> Result<Self, LayoutError> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::new(center)
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Current spiral position. Read-only; only placement moves it.
    pub fn cursor(&self) -> SpiralCursor {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn placed_rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Bounding box of every placed rectangle.
    pub fn bounds(&self) -> Option<Rectangle> {
        let (first, rest) = self.rectangles.split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union(r)))
    }

    /// Place a rectangle of `size` and return where it landed.
    ///
    /// Fails with [`LayoutError::InvalidSize`] before touching any state if
    /// either dimension is not positive.
    pub fn place(&mut self, size: Size) -> Result<Rectangle, LayoutError> {
        if !size.is_positive() {
            return Err(LayoutError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }

        let rectangle = if self.rectangles.is_empty() {
            // Seeds the spiral so the next search starts one ring out.
            self.cursor.next_layer();
            Rectangle::centered_on(self.center, size)
        } else {
            let candidate = self.search(size)?;
            compress(candidate, self.center, |r| self.overlaps(r))
        };

        tracing::debug!(
            index = self.rectangles.len(),
            x = rectangle.x,
            y = rectangle.y,
            width = rectangle.width,
            height = rectangle.height,
            layer = self.cursor.layer(),
            "placed rectangle"
        );

        self.rectangles.push(rectangle);
        Ok(rectangle)
    }

    /// Walk the spiral from its current position to the first free candidate.
    fn search(&mut self, size: Size) -> Result<Rectangle, LayoutError> {
        let mut steps = 0u64;
        loop {
            let point = self.cursor.point(self.center, self.options.ring_step);
            let candidate = Rectangle::centered_on(point, size);
            if !self.overlaps(&candidate) {
                return Ok(candidate);
            }

            steps += 1;
            if let Some(limit) = self.options.max_search_steps {
                if steps >= limit {
                    tracing::warn!(
                        steps,
                        layer = self.cursor.layer(),
                        width = size.width,
                        height = size.height,
                        "spiral search exhausted"
                    );
                    return Err(LayoutError::SearchExhausted { steps });
                }
            }
            self.cursor.advance(self.options.angle_step);
        }
    }

    fn overlaps(&self, rect: &Rectangle) -> bool {
        self.rectangles.iter().any(|placed| placed.intersects(rect))
    }
}

impl CloudLayouter for CircularCloudLayouter {
    fn place(&mut self, size: Size) -> Result<Rectangle, LayoutError> {
        CircularCloudLayouter::place(self, size)
    }

    fn placed_rectangles(&self) -> &[Rectangle] {
        CircularCloudLayouter::placed_rectangles(self)
    }
}
