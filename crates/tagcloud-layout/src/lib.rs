//! Circular tag cloud placement.
//!
//! Rectangles are placed one at a time around a fixed center so that none
//! overlap and the cloud stays roughly circular.
//!
//! # Architecture
//!
//! 1. **Spiral search**: a persistent [`SpiralCursor`] walks outward from the
//!    center until a candidate location is free
//! 2. **Compression**: the candidate slides toward the center along X, then
//!    along Y, stopping before any overlap
//!
//! # Example
//!
//! ```
//! use tagcloud_core::{Point, Size};
//! use tagcloud_layout::CircularCloudLayouter;
//!
//! let mut layouter = CircularCloudLayouter::new(Point::new(10, 10));
//! let first = layouter.place(Size::new(10, 10))?;
//! assert_eq!(first.location(), Point::new(5, 5));
//! # Ok::<(), tagcloud_core::LayoutError>(())
//! ```

mod compress;
mod layouter;
mod spiral;

pub use compress::{compress, compress_axis, Axis};
pub use layouter::{CircularCloudLayouter, CloudLayouter, LayoutOptions};
pub use spiral::{SpiralCursor, ANGLE_STEP, RING_STEP};
