//! Gradia Color Engine
//!
//! Pure color-space math for the gradient engine:
//!
//! - **Rgb**: 8-bit sRGB with hex parsing/formatting and RGB-space lerp
//! - **Hsv**: hue/saturation/value, tolerant of unbounded hue accumulation
//! - **Lab**: CIE 1976 L*a*b* under D65, for perceptual distance only
//!
//! Interpolation happens in RGB space on purpose — it matches what
//! canvas/CSS gradients actually render, not perceptual uniformity. Lab is
//! reserved for similarity comparisons and is never serialized.
//!
//! # Example
//!
//! ```rust
//! use gradia_color::Rgb;
//!
//! let night = Rgb::from_hex("#0a1128").unwrap();
//! let noon = Rgb::from_hex("63B4E7").unwrap(); // '#' optional
//! let mid = Rgb::lerp(night, noon, 0.5);
//! assert_eq!(Rgb::from_hex(&mid.to_hex()).unwrap(), mid);
//! ```

pub mod hsv;
pub mod lab;
pub mod rgb;

pub use hsv::Hsv;
pub use lab::{hex_to_lab, Lab};
pub use rgb::{rotate_hue_hex, Rgb};

use thiserror::Error;

/// Errors produced by color parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input did not resolve to exactly six hex digits after normalization
    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),
}
