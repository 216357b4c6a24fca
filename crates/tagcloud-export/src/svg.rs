//! SVG export for rendered clouds.

use tagcloud_core::types::Color;
use tagcloud_render_2d::{EllipsePrimitive, RectPrimitive, RenderCommand, Scene};

/// Export a scene to an SVG document.
pub fn export(scene: &Scene) -> String {
    let mut svg = String::new();

    // XML declaration and SVG root
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
        w = scene.width,
        h = scene.height,
    ));

    let mut builder = SvgBuilder {
        svg: &mut svg,
        indent: 1,
    };

    builder.write_background(scene);
    for command in &scene.commands {
        match command {
            RenderCommand::Rect(rect) => builder.write_rect(rect),
            RenderCommand::Ellipse(ellipse) => builder.write_ellipse(ellipse),
        }
    }

    svg.push_str("</svg>\n");
    svg
}

struct SvgBuilder<'a> {
    svg: &'a mut String,
    indent: usize,
}

impl<'a> SvgBuilder<'a> {
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.svg.push_str("  ");
        }
    }

    fn write_element(&mut self, tag: &str, attrs: &[String]) {
        self.write_indent();
        self.svg.push('<');
        self.svg.push_str(tag);
        for attr in attrs {
            self.svg.push(' ');
            self.svg.push_str(attr);
        }
        self.svg.push_str("/>\n");
    }

    fn write_background(&mut self, scene: &Scene) {
        if scene.background.a <= 0.0 {
            return;
        }
        let mut attrs = vec![
            "width=\"100%\"".to_string(),
            "height=\"100%\"".to_string(),
        ];
        push_paint(&mut attrs, "fill", scene.background);
        self.write_element("rect", &attrs);
    }

    fn write_rect(&mut self, rect: &RectPrimitive) {
        // SVG centers strokes on the path, so pull the path in by half the
        // outline width to keep the outline inside the rectangle.
        let stroke = rect.stroke.and_then(|stroke| {
            let width = stroke.width.min(rect.width / 2.0).min(rect.height / 2.0);
            (width > 0.0).then_some((stroke.color, width))
        });
        let inset = stroke.map_or(0.0, |(_, width)| width / 2.0);

        let mut attrs = vec![
            format!("x=\"{}\"", rect.x + inset),
            format!("y=\"{}\"", rect.y + inset),
            format!("width=\"{}\"", rect.width - 2.0 * inset),
            format!("height=\"{}\"", rect.height - 2.0 * inset),
        ];

        match rect.fill {
            Some(color) => push_paint(&mut attrs, "fill", color),
            None => attrs.push("fill=\"none\"".to_string()),
        }

        if let Some((color, width)) = stroke {
            push_paint(&mut attrs, "stroke", color);
            attrs.push(format!("stroke-width=\"{width}\""));
        }

        self.write_element("rect", &attrs);
    }

    fn write_ellipse(&mut self, ellipse: &EllipsePrimitive) {
        let mut attrs = vec![
            format!("cx=\"{}\"", ellipse.center_x),
            format!("cy=\"{}\"", ellipse.center_y),
            format!("rx=\"{}\"", ellipse.radius_x),
            format!("ry=\"{}\"", ellipse.radius_y),
        ];
        match ellipse.fill {
            Some(color) => push_paint(&mut attrs, "fill", color),
            None => attrs.push("fill=\"none\"".to_string()),
        }
        self.write_element("ellipse", &attrs);
    }
}

fn push_paint(attrs: &mut Vec<String>, name: &str, color: Color) {
    attrs.push(format!("{name}=\"{}\"", color.to_hex()));
    if color.a < 1.0 {
        attrs.push(format!("{name}-opacity=\"{}\"", color.a));
    }
}
