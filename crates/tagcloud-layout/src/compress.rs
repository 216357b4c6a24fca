//! Greedy compression of a placed rectangle toward the cloud center.

use tagcloud_core::{Point, Rectangle};

/// Axis along which a compression pass slides a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Which side of the center a rectangle lies on, along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Near edge strictly past the center coordinate.
    Positive,
    /// Far edge strictly before the center coordinate.
    Negative,
}

impl Side {
    /// Unit step that moves a rectangle on this side toward the center.
    fn step(self) -> i32 {
        match self {
            Side::Positive => -1,
            Side::Negative => 1,
        }
    }
}

impl Axis {
    fn coordinate(self, point: Point) -> i32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    fn near_edge(self, rect: &Rectangle) -> i32 {
        match self {
            Axis::X => rect.left(),
            Axis::Y => rect.top(),
        }
    }

    fn far_edge(self, rect: &Rectangle) -> i32 {
        match self {
            Axis::X => rect.right(),
            Axis::Y => rect.bottom(),
        }
    }

    fn shift(self, rect: &Rectangle, delta: i32) -> Rectangle {
        match self {
            Axis::X => rect.translate(delta, 0),
            Axis::Y => rect.translate(0, delta),
        }
    }

    /// `None` when the rectangle straddles or touches the center line.
    fn side(self, rect: &Rectangle, center: Point) -> Option<Side> {
        let target = self.coordinate(center);
        let positive = self.near_edge(rect) > target;
        let negative = self.far_edge(rect) < target;
        match (positive, negative) {
            (true, false) => Some(Side::Positive),
            (false, true) => Some(Side::Negative),
            _ => None,
        }
    }
}

/// Slide `rect` toward `center` along `axis`, one unit at a time.
///
/// Stops at the last position where `overlaps` is false and the rectangle
/// is still entirely on its original side of the center.
pub fn compress_axis<F>(rect: Rectangle, center: Point, axis: Axis, overlaps: F) -> Rectangle
where
    F: Fn(&Rectangle) -> bool,
{
    let Some(side) = axis.side(&rect, center) else {
        return rect;
    };

    let mut current = rect;
    loop {
        let moved = axis.shift(&current, side.step());
        if axis.side(&moved, center) != Some(side) || overlaps(&moved) {
            break;
        }
        current = moved;
    }

    tracing::trace!(
        ?axis,
        distance = axis.near_edge(&rect) - axis.near_edge(&current),
        "compressed rectangle"
    );
    current
}

/// Run the X pass, then the Y pass on its result.
pub fn compress<F>(rect: Rectangle, center: Point, overlaps: F) -> Rectangle
where
    F: Fn(&Rectangle) -> bool,
{
    let rect = compress_axis(rect, center, Axis::X, &overlaps);
    compress_axis(rect, center, Axis::Y, &overlaps)
}
