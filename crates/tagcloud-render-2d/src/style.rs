//! Visual style for rendered clouds.

use tagcloud_core::types::Color;

/// Colors and sizes used when drawing a cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudStyle {
    /// Canvas color behind the cloud
    pub background: Color,
    /// Rectangle fill
    pub fill: Color,
    /// Rectangle outline
    pub stroke: Color,
    /// Outline thickness in pixels (0 disables the outline)
    pub stroke_width: f32,
    /// Color of the dot marking the cloud center
    pub center_marker: Color,
    /// Diameter of the center dot in pixels (0 disables the marker)
    pub marker_size: f32,
}

impl Default for CloudStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            fill: Color::BLUE,
            stroke: Color::BLACK,
            stroke_width: 1.0,
            center_marker: Color::RED,
            marker_size: 2.0,
        }
    }
}
