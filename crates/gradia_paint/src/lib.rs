//! Gradia Gradient Model
//!
//! The data structures and output surfaces for the gradient engine:
//!
//! - **LinearGradient**: an ordered stop list (always >= 2 stops) with
//!   color-at-position sampling and stable re-sorting on every mutation
//! - **RadialGradient**: center/outer/mid colors plus shape, anchor,
//!   extent, and softness
//! - **Gradient**: the `kind`-tagged union the rest of the engine
//!   pattern-matches on
//! - Output: CSS strings for clipboard export, design-tool paint
//!   descriptors, and PNG raster export
//!
//! Stops are stored as given; storage order need not be monotonic. Every
//! consumer sorts by position (stably) before sampling or serializing.
//!
//! # Example
//!
//! ```rust
//! use gradia_color::Rgb;
//! use gradia_paint::LinearGradient;
//!
//! let g = LinearGradient::from_colors(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
//! assert_eq!(g.sample(0.5), Rgb::GRAY);
//! assert_eq!(g.to_css(), "linear-gradient(to bottom, #000000 0%, #FFFFFF 100%)");
//! ```

pub mod descriptor;
pub mod gradient;
pub mod linear;
pub mod radial;
pub mod raster;

pub use descriptor::{LinearPaint, PaintColor, PaintStop};
pub use gradient::Gradient;
pub use linear::{LinearGradient, Stop};
pub use radial::{RadialAnchor, RadialExtent, RadialGradient, RadialShape, Softness};
pub use raster::encode_png;

use thiserror::Error;

/// Errors produced by gradient mutation and export
#[derive(Error, Debug)]
pub enum PaintError {
    /// A gradient must keep at least two stops
    #[error("a gradient needs at least 2 color stops")]
    MinimumStops,

    /// Stop index outside the current stop list
    #[error("stop index {index} out of bounds (len {len})")]
    StopIndexOutOfBounds { index: usize, len: usize },

    /// PNG encoding failed
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
