//! Core value types for tag cloud layout.

/// An integer point in canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An integer width/height pair.
///
/// A `Size` may hold any values; the layout engine rejects sizes that are
/// not strictly positive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive.
    pub const fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(location: Point, size: Size) -> Self {
        Self {
            x: location.x,
            y: location.y,
            width: size.width,
            height: size.height,
        }
    }

    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle of `size` whose [`center`](Self::center) is `point`.
    pub const fn centered_on(point: Point, size: Size) -> Self {
        Self::new(point.offset(-(size.width / 2), -(size.height / 2)), size)
    }

    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge (x + width).
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (y + height).
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center point, rounded toward the top-left (integer division).
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Return this rectangle moved by `(dx, dy)`.
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::from_xywh(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether the interiors of the two rectangles intersect.
    ///
    /// Rectangles sharing only an edge or a corner do not intersect.
    pub const fn intersects(&self, other: &Rectangle) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }

    /// Whether `point` lies inside, using half-open bounds.
    pub const fn contains(&self, point: Point) -> bool {
        self.x <= point.x && point.x < self.right() && self.y <= point.y && point.y < self.bottom()
    }

    /// Smallest rectangle enclosing both.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rectangle::from_xywh(x1, y1, x2 - x1, y2 - y1)
    }
}

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from hex string (e.g., "#FF5733" or "FF5733CC").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => {
                let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
                color.a = channel(6)? as f32 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Format as `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_uses_integer_division() {
        let rect = Rectangle::centered_on(Point::new(10, 10), Size::new(10, 10));
        assert_eq!(rect.location(), Point::new(5, 5));
        assert_eq!(rect.center(), Point::new(10, 10));

        let odd = Rectangle::centered_on(Point::new(0, 0), Size::new(5, 7));
        assert_eq!(odd.location(), Point::new(-2, -3));
        assert_eq!(odd.center(), Point::new(0, 0));
    }

    #[test]
    fn test_touching_rectangles_do_not_intersect() {
        let a = Rectangle::from_xywh(0, 0, 10, 10);
        let right = Rectangle::from_xywh(10, 0, 10, 10);
        let below = Rectangle::from_xywh(0, 10, 10, 10);
        let corner = Rectangle::from_xywh(10, 10, 5, 5);

        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
        assert!(a.intersects(&Rectangle::from_xywh(9, 9, 5, 5)));
        assert!(a.intersects(&Rectangle::from_xywh(2, 2, 3, 3)));
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rectangle::from_xywh(0, 0, 10, 10);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(9, 9)));
        assert!(!rect.contains(Point::new(10, 5)));
        assert!(!rect.contains(Point::new(5, 10)));
    }

    #[test]
    fn test_union() {
        let a = Rectangle::from_xywh(0, 0, 10, 10);
        let b = Rectangle::from_xywh(-5, 20, 5, 5);
        assert_eq!(a.union(&b), Rectangle::from_xywh(-5, 0, 15, 25));
    }

    #[test]
    fn test_size_is_positive() {
        assert!(Size::new(1, 1).is_positive());
        assert!(!Size::new(0, 1).is_positive());
        assert!(!Size::new(1, 0).is_positive());
        assert!(!Size::new(-3, 4).is_positive());
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#FF0000").unwrap();
        assert_eq!(color.to_rgba8(), (255, 0, 0, 255));
        let color = Color::from_hex("0000ff80").unwrap();
        assert_eq!(color.to_rgba8(), (0, 0, 255, 128));
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
        assert_eq!(Color::BLUE.to_hex(), "#0000ff");
    }
}
