//! Raster export
//!
//! Renders gradients into RGBA pixel buffers for PNG download. The
//! canonical export is 1920x1080, top-to-bottom for linear gradients.
//! Radial rendering approximates the CSS collaborator: normalized
//! distance from the anchor, scaled by the extent's reference radius,
//! mapped through the softness stop range.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use tracing::debug;

use crate::radial::sample_stop_list;
use crate::{Gradient, LinearGradient, PaintError, RadialExtent, RadialGradient, RadialShape};

/// Canonical export size (16:9)
pub const EXPORT_WIDTH: u32 = 1920;
pub const EXPORT_HEIGHT: u32 = 1080;

impl Gradient {
    /// Render to an RGBA buffer of the given size
    pub fn render(&self, width: u32, height: u32) -> RgbaImage {
        match self {
            Gradient::Linear(g) => render_linear(g, width, height),
            Gradient::Radial(g) => render_radial(g, width, height),
        }
    }

    /// Render at the canonical download size
    pub fn render_export(&self) -> RgbaImage {
        self.render(EXPORT_WIDTH, EXPORT_HEIGHT)
    }
}

/// Fill rows top to bottom with the sampled gradient color
pub fn render_linear(gradient: &LinearGradient, width: u32, height: u32) -> RgbaImage {
    debug!(width, height, "rendering linear gradient");
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let t = if height > 1 {
            y as f32 / (height - 1) as f32
        } else {
            0.0
        };
        let c = gradient.sample(t);
        let pixel = Rgba([c.r, c.g, c.b, 255]);
        for x in 0..width {
            img.put_pixel(x, y, pixel);
        }
    }
    img
}

/// Fill pixels by normalized distance from the anchor
pub fn render_radial(gradient: &RadialGradient, width: u32, height: u32) -> RgbaImage {
    debug!(width, height, "rendering radial gradient");
    let stops = gradient.stop_list();
    let (w, h) = (width as f32, height as f32);
    let (fx, fy) = gradient.anchor.fraction();
    let (cx, cy) = (fx * w, fy * h);
    let (rx, ry) = reference_radii(gradient.shape, gradient.extent, cx, cy, w, h);

    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            let d = (dx * dx + dy * dy).sqrt();
            let c = sample_stop_list(&stops, d * 100.0);
            img.put_pixel(x, y, Rgba([c.r, c.g, c.b, 255]));
        }
    }
    img
}

/// Encode an RGBA buffer as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, PaintError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Per-axis reference radii for the shape/extent combination. Circles use
/// one shared radius; ellipses track horizontal and vertical sides
/// separately, with the farthest-corner case scaling the farthest-side
/// ellipse until it passes through the farthest corner.
fn reference_radii(
    shape: RadialShape,
    extent: RadialExtent,
    cx: f32,
    cy: f32,
    w: f32,
    h: f32,
) -> (f32, f32) {
    let side_x = [cx.abs(), (w - cx).abs()];
    let side_y = [cy.abs(), (h - cy).abs()];
    let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];

    let (rx, ry) = match (shape, extent) {
        (RadialShape::Circle, RadialExtent::Small) => {
            let r = side_x
                .iter()
                .chain(side_y.iter())
                .fold(f32::INFINITY, |a, &b| a.min(b));
            (r, r)
        }
        (RadialShape::Circle, RadialExtent::Large) => {
            let r = side_x.iter().chain(side_y.iter()).fold(0.0f32, |a, &b| a.max(b));
            (r, r)
        }
        (RadialShape::Circle, RadialExtent::Medium) => {
            let r = corners
                .iter()
                .map(|&(px, py)| ((cx - px).powi(2) + (cy - py).powi(2)).sqrt())
                .fold(0.0f32, f32::max);
            (r, r)
        }
        (RadialShape::Ellipse, RadialExtent::Small) => (
            side_x[0].min(side_x[1]),
            side_y[0].min(side_y[1]),
        ),
        (RadialShape::Ellipse, RadialExtent::Large) => (
            side_x[0].max(side_x[1]),
            side_y[0].max(side_y[1]),
        ),
        (RadialShape::Ellipse, RadialExtent::Medium) => {
            let rx = side_x[0].max(side_x[1]).max(f32::EPSILON);
            let ry = side_y[0].max(side_y[1]).max(f32::EPSILON);
            let k = corners
                .iter()
                .map(|&(px, py)| {
                    (((cx - px) / rx).powi(2) + ((cy - py) / ry).powi(2)).sqrt()
                })
                .fold(0.0f32, f32::max);
            (rx * k, ry * k)
        }
    };
    (rx.max(f32::EPSILON), ry.max(f32::EPSILON))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Softness, Stop};
    use gradia_color::Rgb;

    #[test]
    fn linear_render_matches_end_stops() {
        let g = LinearGradient::new([Stop::new(0, Rgb::RED), Stop::new(100, Rgb::BLUE)]).unwrap();
        let img = render_linear(&g, 4, 9);
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(3, 8), &Rgba([0, 0, 255, 255]));
        // Midpoint row blends halfway
        assert_eq!(img.get_pixel(2, 4), &Rgba([128, 0, 128, 255]));
    }

    #[test]
    fn radial_render_fades_from_center_to_corner() {
        let mut g = RadialGradient::simple(Rgb::WHITE, Rgb::BLACK);
        g.softness = Softness::UltraSoft;
        let img = render_radial(&g, 64, 64);
        // Center pixel sits a half-pixel off the exact anchor
        assert!(img.get_pixel(32, 32).0[0] >= 248);
        // The farthest corner reaches the outer color
        assert!(img.get_pixel(0, 0).0[0] <= 8);
    }

    #[test]
    fn export_render_uses_the_canonical_size() {
        let g = LinearGradient::new([Stop::new(0, Rgb::BLACK), Stop::new(100, Rgb::WHITE)]).unwrap();
        let img = Gradient::Linear(g).render_export();
        assert_eq!(img.dimensions(), (EXPORT_WIDTH, EXPORT_HEIGHT));
    }

    #[test]
    fn png_encoding_produces_a_png_header() {
        let g = LinearGradient::new([Stop::new(0, Rgb::BLACK), Stop::new(100, Rgb::WHITE)]).unwrap();
        let img = render_linear(&g, 8, 8);
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }
}
