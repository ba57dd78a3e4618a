//! CIE 1976 L*a*b* under the D65 white point
//!
//! Perceptual comparison space for the gallery sequencer. Conversion goes
//! gamma-expanded sRGB -> XYZ -> Lab; the distance metric is deltaE76,
//! coarse but cheap. Lab values never leave the engine.

use crate::Rgb;

/// D65 reference white
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

/// Threshold between the cube-root and linear segments of f(t)
const F_THRESHOLD: f64 = 0.008856;

/// CIE L*a*b* color
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in Lab space (deltaE 1976)
    pub fn delta_e76(&self, other: &Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl Rgb {
    /// Convert to Lab via linear-light sRGB and CIE XYZ
    pub fn to_lab(self) -> Lab {
        let r = gamma_expand(self.r as f64 / 255.0);
        let g = gamma_expand(self.g as f64 / 255.0);
        let b = gamma_expand(self.b as f64 / 255.0);

        // sRGB to XYZ (D65)
        let x = (r * 0.4124564 + g * 0.3575761 + b * 0.1804375) / XN;
        let y = (r * 0.2126729 + g * 0.7151522 + b * 0.0721750) / YN;
        let z = (r * 0.0193339 + g * 0.1191920 + b * 0.9503041) / ZN;

        let fx = f(x);
        let fy = f(y);
        let fz = f(z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// Parse a hex string and convert straight to Lab
pub fn hex_to_lab(hex: &str) -> Result<Lab, crate::ColorError> {
    Ok(Rgb::from_hex(hex)?.to_lab())
}

fn gamma_expand(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn f(t: f64) -> f64 {
    if t > F_THRESHOLD {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_l100() {
        let lab = Rgb::WHITE.to_lab();
        assert!((lab.l - 100.0).abs() < 0.01);
        assert!(lab.a.abs() < 0.01);
        assert!(lab.b.abs() < 0.01);
    }

    #[test]
    fn black_is_l0() {
        let lab = Rgb::BLACK.to_lab();
        assert!(lab.l.abs() < 0.2);
    }

    #[test]
    fn red_has_positive_a() {
        let lab = Rgb::RED.to_lab();
        assert!((lab.l - 53.24).abs() < 0.1);
        assert!(lab.a > 60.0);
        assert!(lab.b > 30.0);
    }

    #[test]
    fn delta_e_is_symmetric_and_zero_on_self() {
        let a = Rgb::new(99, 180, 231).to_lab();
        let b = Rgb::new(0, 5, 24).to_lab();
        assert_eq!(a.delta_e76(&a), 0.0);
        assert!((a.delta_e76(&b) - b.delta_e76(&a)).abs() < 1e-12);
        assert!(a.delta_e76(&b) > 0.0);
    }

    #[test]
    fn nearby_colors_are_closer_than_distant_ones() {
        let navy = hex_to_lab("#001f3f").unwrap();
        let blue = hex_to_lab("#0074d9").unwrap();
        let orange = hex_to_lab("#ff6b35").unwrap();
        assert!(navy.delta_e76(&blue) < navy.delta_e76(&orange));
        assert!(hex_to_lab("nope").is_err());
    }
}
