//! Radial gradients
//!
//! A radial gradient is described by a center and outer color, optional
//! mid colors, and three presentation knobs: shape, anchor, and extent.
//! `softness` controls how far the center color reaches before the outer
//! color takes over; it resolves to a `(center_stop, outer_stop)` pair in
//! percent space and every mid-color position is re-scaled into that
//! range before use — raw mid positions never reach an output surface.

use std::cmp::Ordering;

use gradia_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::linear::Stop;

/// Radial shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    #[default]
    Circle,
    Ellipse,
}

impl RadialShape {
    pub fn to_css(self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

/// How far the gradient extends before padding with the outer color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialExtent {
    Small,
    #[default]
    Medium,
    Large,
}

impl RadialExtent {
    pub fn to_css(self) -> &'static str {
        match self {
            RadialExtent::Small => "closest-side",
            RadialExtent::Medium => "farthest-corner",
            RadialExtent::Large => "farthest-side",
        }
    }
}

/// How gradually the center color gives way to the outer color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Softness {
    Sharp,
    #[default]
    Soft,
    UltraSoft,
}

impl Softness {
    /// The `(center_stop, outer_stop)` percent pair this softness maps to
    pub fn stop_range(self) -> (u8, u8) {
        match self {
            Softness::Sharp => (0, 60),
            Softness::Soft => (0, 85),
            Softness::UltraSoft => (0, 100),
        }
    }
}

/// Named anchor positions, including the four off-canvas variants that
/// push the center past a corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadialAnchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    OffTopLeft,
    OffTopRight,
    OffBottomLeft,
    OffBottomRight,
}

impl RadialAnchor {
    /// CSS position term for `radial-gradient(... at <position>, ...)`
    pub fn to_css(self) -> &'static str {
        match self {
            RadialAnchor::Center => "center",
            RadialAnchor::Top => "top",
            RadialAnchor::Bottom => "bottom",
            RadialAnchor::Left => "left",
            RadialAnchor::Right => "right",
            RadialAnchor::TopLeft => "top left",
            RadialAnchor::TopRight => "top right",
            RadialAnchor::BottomLeft => "bottom left",
            RadialAnchor::BottomRight => "bottom right",
            RadialAnchor::OffTopLeft => "-25% -25%",
            RadialAnchor::OffTopRight => "125% -25%",
            RadialAnchor::OffBottomLeft => "-25% 125%",
            RadialAnchor::OffBottomRight => "125% 125%",
        }
    }

    /// Anchor as a fraction of the canvas; off-canvas variants fall
    /// outside `[0, 1]`
    pub fn fraction(self) -> (f32, f32) {
        match self {
            RadialAnchor::Center => (0.5, 0.5),
            RadialAnchor::Top => (0.5, 0.0),
            RadialAnchor::Bottom => (0.5, 1.0),
            RadialAnchor::Left => (0.0, 0.5),
            RadialAnchor::Right => (1.0, 0.5),
            RadialAnchor::TopLeft => (0.0, 0.0),
            RadialAnchor::TopRight => (1.0, 0.0),
            RadialAnchor::BottomLeft => (0.0, 1.0),
            RadialAnchor::BottomRight => (1.0, 1.0),
            RadialAnchor::OffTopLeft => (-0.25, -0.25),
            RadialAnchor::OffTopRight => (1.25, -0.25),
            RadialAnchor::OffBottomLeft => (-0.25, 1.25),
            RadialAnchor::OffBottomRight => (1.25, 1.25),
        }
    }
}

/// Radial gradient description
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialGradient {
    pub center_color: Rgb,
    pub outer_color: Rgb,
    /// Optional intermediate colors; positions are in raw `0..=100` space
    /// and re-scaled into the softness stop range before use
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mid_colors: Vec<Stop>,
    #[serde(default)]
    pub shape: RadialShape,
    #[serde(default)]
    pub anchor: RadialAnchor,
    #[serde(default)]
    pub extent: RadialExtent,
    #[serde(default)]
    pub softness: Softness,
}

impl RadialGradient {
    /// Two-color radial gradient with default presentation
    pub fn simple(center_color: Rgb, outer_color: Rgb) -> Self {
        Self {
            center_color,
            outer_color,
            mid_colors: Vec::new(),
            shape: RadialShape::default(),
            anchor: RadialAnchor::default(),
            extent: RadialExtent::default(),
            softness: Softness::default(),
        }
    }

    /// Re-scale a raw mid-color position into the softness stop range
    pub fn scale_mid_position(&self, position: u8) -> f32 {
        let (center_stop, outer_stop) = self.softness.stop_range();
        let span = outer_stop as f32 - center_stop as f32;
        center_stop as f32 + position as f32 / 100.0 * span
    }

    /// Mid colors with positions re-scaled into the softness stop range,
    /// sorted ascending (stable in the stored order)
    pub fn scaled_mid_stops(&self) -> Vec<(f32, Rgb)> {
        let mut scaled: Vec<(f32, Rgb)> = self
            .mid_colors
            .iter()
            .map(|s| (self.scale_mid_position(s.position), s.color))
            .collect();
        scaled.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        scaled
    }

    /// All colors in canonical order: center, mids (stored order), outer
    pub fn colors(&self) -> Vec<Rgb> {
        let mut colors = Vec::with_capacity(self.mid_colors.len() + 2);
        colors.push(self.center_color);
        colors.extend(self.mid_colors.iter().map(|s| s.color));
        colors.push(self.outer_color);
        colors
    }

    /// Replace colors in canonical order (center, mids, outer), keeping
    /// existing colors where `colors` runs short
    pub fn with_colors(&self, colors: &[Rgb]) -> RadialGradient {
        let mut out = self.clone();
        let mut it = colors.iter().copied();
        if let Some(c) = it.next() {
            out.center_color = c;
        }
        for stop in out.mid_colors.iter_mut() {
            match it.next() {
                Some(c) => stop.color = c,
                None => return out,
            }
        }
        if let Some(c) = it.next() {
            out.outer_color = c;
        }
        out
    }

    /// Color at normalized radial distance `t` in `[0, 1]`.
    ///
    /// Uses the same stop list as the CSS output: center at the softness
    /// center stop, scaled mids, outer at the outer stop, padded with the
    /// outer color beyond it.
    pub fn sample(&self, t: f32) -> Rgb {
        sample_stop_list(&self.stop_list(), t * 100.0)
    }

    /// The percent-space stop list shared by sampling, CSS output, and
    /// the rasterizer: center, scaled mids, outer
    pub(crate) fn stop_list(&self) -> Vec<(f32, Rgb)> {
        let (center_stop, outer_stop) = self.softness.stop_range();
        let mut list: Vec<(f32, Rgb)> = Vec::with_capacity(self.mid_colors.len() + 2);
        list.push((center_stop as f32, self.center_color));
        list.extend(self.scaled_mid_stops());
        list.push((outer_stop as f32, self.outer_color));
        list
    }

    /// CSS serialization, e.g.
    /// `radial-gradient(circle farthest-corner at center, #FFF5D7 0%, #1A1A40 85%, #1A1A40 100%)`
    pub fn to_css(&self) -> String {
        let (center_stop, outer_stop) = self.softness.stop_range();

        let mut parts: Vec<String> = Vec::with_capacity(self.mid_colors.len() + 3);
        parts.push(stop_part(self.center_color, center_stop as f32));
        for (pos, color) in self.scaled_mid_stops() {
            parts.push(stop_part(color, pos));
        }
        parts.push(stop_part(self.outer_color, outer_stop as f32));
        if outer_stop < 100 {
            parts.push(stop_part(self.outer_color, 100.0));
        }

        format!(
            "radial-gradient({} {} at {}, {})",
            self.shape.to_css(),
            self.extent.to_css(),
            self.anchor.to_css(),
            parts.join(", ")
        )
    }
}

fn stop_part(color: Rgb, position: f32) -> String {
    format!("{} {}%", color.to_hex().to_uppercase(), position.round() as i64)
}

/// Sample a percent-space stop list: ends pad, brackets interpolate in
/// RGB, zero-width brackets resolve to the later stop's color
pub(crate) fn sample_stop_list(list: &[(f32, Rgb)], pos: f32) -> Rgb {
    let (first_pos, first_color) = list[0];
    let (last_pos, last_color) = list[list.len() - 1];
    if pos <= first_pos {
        return first_color;
    }
    if pos >= last_pos {
        return last_color;
    }

    for pair in list.windows(2) {
        let ((p0, c0), (p1, c1)) = (pair[0], pair[1]);
        if pos >= p0 && pos <= p1 {
            let width = p1 - p0;
            if width == 0.0 {
                return c1;
            }
            return Rgb::lerp(c0, c1, (pos - p0) / width);
        }
    }
    last_color
}
