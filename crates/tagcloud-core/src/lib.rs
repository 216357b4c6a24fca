//! Core types and errors shared by the tag cloud crates.
//!
//! - Integer geometry: [`Point`], [`Size`], [`Rectangle`]
//! - [`Color`] for render styles
//! - Error enums for layout, rendering, and export

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
