//! Scene building from placed rectangles.

use tagcloud_core::Rectangle;

use crate::primitives::{EllipsePrimitive, RectPrimitive, Scene, Stroke};
use crate::style::CloudStyle;

/// Build a renderable scene from rectangles in placement order.
///
/// Each rectangle is filled and outlined. The center of the first rectangle,
/// which is the cloud center, is marked with a dot drawn on top.
pub fn build_scene(rectangles: &[Rectangle], width: u32, height: u32, style: &CloudStyle) -> Scene {
    let mut scene = Scene::new(width, height, style.background);
    append_rectangles(&mut scene, rectangles, style);
    scene
}

/// Append rectangles and their center marker to an existing scene.
pub fn append_rectangles(scene: &mut Scene, rectangles: &[Rectangle], style: &CloudStyle) {
    let Some(first) = rectangles.first() else {
        return;
    };

    for rect in rectangles {
        let mut primitive = RectPrimitive::new(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        )
        .with_fill(style.fill);
        if style.stroke_width > 0.0 {
            primitive = primitive.with_stroke(Stroke::new(style.stroke, style.stroke_width));
        }
        scene.rect(primitive);
    }

    if style.marker_size > 0.0 {
        let center = first.center();
        scene.ellipse(
            EllipsePrimitive::circle(center.x as f32, center.y as f32, style.marker_size / 2.0)
                .with_fill(style.center_marker),
        );
    }
}
