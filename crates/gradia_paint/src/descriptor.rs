//! Design-tool paint descriptors
//!
//! The plugin collaborator paints gradients onto document nodes using its
//! host API's paint objects: stop positions in `[0, 1]`, float color
//! channels in `[0, 1]`, and an affine transform. The fixed transform
//! below rotates the host's default left-to-right axis to top-to-bottom,
//! matching the CSS output.

use gradia_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::LinearGradient;

/// Rotates the host's default left->right gradient axis to top->bottom
pub const TOP_TO_BOTTOM: [[f32; 3]; 2] = [[0.0, 1.0, 0.0], [-1.0, 0.0, 1.0]];

/// Float-channel color as the plugin host expects it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl From<Rgb> for PaintColor {
    fn from(c: Rgb) -> Self {
        Self {
            r: c.r as f32 / 255.0,
            g: c.g as f32 / 255.0,
            b: c.b as f32 / 255.0,
        }
    }
}

/// One stop of a paint descriptor, position normalized into `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaintStop {
    pub position: f32,
    pub color: PaintColor,
}

/// A linear gradient paint ready to serialize toward the plugin host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearPaint {
    #[serde(rename = "type")]
    pub paint_type: String,
    pub gradient_stops: Vec<PaintStop>,
    pub gradient_transform: [[f32; 3]; 2],
}

impl LinearGradient {
    /// Build the plugin paint descriptor from the sorted stop list
    pub fn to_paint(&self) -> LinearPaint {
        LinearPaint {
            paint_type: "GRADIENT_LINEAR".to_string(),
            gradient_stops: self
                .sorted_stops()
                .iter()
                .map(|s| PaintStop {
                    position: s.position as f32 / 100.0,
                    color: PaintColor::from(s.color),
                })
                .collect(),
            gradient_transform: TOP_TO_BOTTOM,
        }
    }
}
