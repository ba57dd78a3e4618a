//! Linear gradients
//!
//! An ordered-by-position stop list. Positions live in `0..=100` percent
//! space and are clamped on the way in; storage order is normalized by a
//! stable ascending re-sort after every mutation, and consumers sort a
//! copy before sampling or serializing so externally constructed lists
//! need not arrive monotonic.

use gradia_color::Rgb;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::PaintError;

/// A `(position, color)` pair anchoring the gradient at a point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Position along the gradient axis, percent
    pub position: u8,
    /// Color at this stop
    pub color: Rgb,
}

impl Stop {
    /// Create a stop, clamping `position` into `0..=100`
    pub fn new(position: i32, color: Rgb) -> Self {
        Self {
            position: position.clamp(0, 100) as u8,
            color,
        }
    }
}

/// Linear gradient: at least two stops, rendered top to bottom
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedStops")]
pub struct LinearGradient {
    stops: SmallVec<[Stop; 4]>,
}

#[derive(Deserialize)]
struct UncheckedStops {
    stops: SmallVec<[Stop; 4]>,
}

impl TryFrom<UncheckedStops> for LinearGradient {
    type Error = PaintError;

    fn try_from(raw: UncheckedStops) -> Result<Self, PaintError> {
        LinearGradient::new(raw.stops)
    }
}

impl LinearGradient {
    /// Build from an explicit stop list. Fails with
    /// [`PaintError::MinimumStops`] for fewer than two stops; the given
    /// storage order is preserved.
    pub fn new(stops: impl IntoIterator<Item = Stop>) -> Result<Self, PaintError> {
        let stops: SmallVec<[Stop; 4]> = stops.into_iter().collect();
        if stops.len() < 2 {
            return Err(PaintError::MinimumStops);
        }
        Ok(Self { stops })
    }

    /// Build from a bare color list (the shape the generation collaborator
    /// returns), spacing stops evenly across `0..=100`.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, PaintError> {
        if colors.len() < 2 {
            return Err(PaintError::MinimumStops);
        }
        let last = (colors.len() - 1) as f32;
        Self::new(colors.iter().enumerate().map(|(i, &color)| {
            Stop::new((i as f32 * 100.0 / last).round() as i32, color)
        }))
    }

    /// Stops in storage order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops sorted ascending by position (stable)
    pub fn sorted_stops(&self) -> SmallVec<[Stop; 4]> {
        let mut sorted = self.stops.clone();
        sorted.sort_by_key(|s| s.position);
        sorted
    }

    /// Color at `t` in `[0, 1]`.
    ///
    /// Outside the first/last sorted stop the end color pads. Between
    /// stops, the bracketing pair interpolates in RGB space; a zero-width
    /// bracket resolves to the later stop's color.
    pub fn sample(&self, t: f32) -> Rgb {
        let sorted = self.sorted_stops();
        let pos = t * 100.0;

        let first = sorted[0];
        let last = sorted[sorted.len() - 1];
        if pos <= first.position as f32 {
            return first.color;
        }
        if pos >= last.position as f32 {
            return last.color;
        }

        for pair in sorted.windows(2) {
            let (s0, s1) = (pair[0], pair[1]);
            if pos >= s0.position as f32 && pos <= s1.position as f32 {
                let width = s1.position as f32 - s0.position as f32;
                if width == 0.0 {
                    return s1.color;
                }
                return Rgb::lerp(s0.color, s1.color, (pos - s0.position as f32) / width);
            }
        }
        first.color
    }

    /// Canonical CSS serialization, e.g.
    /// `linear-gradient(to bottom, #000518 0%, #63B4E7 100%)`.
    /// Hex is uppercased at this boundary.
    pub fn to_css(&self) -> String {
        let parts: Vec<String> = self
            .sorted_stops()
            .iter()
            .map(|s| format!("{} {}%", s.color.to_hex().to_uppercase(), s.position))
            .collect();
        format!("linear-gradient(to bottom, {})", parts.join(", "))
    }

    /// Append a stop (position clamped), then re-sort
    pub fn add_stop(&mut self, position: i32, color: Rgb) {
        self.stops.push(Stop::new(position, color));
        self.resort();
    }

    /// Move the stop at `index` to a new (clamped) position, then re-sort
    pub fn move_stop(&mut self, index: usize, position: i32) -> Result<(), PaintError> {
        self.check_index(index)?;
        self.stops[index].position = position.clamp(0, 100) as u8;
        self.resort();
        Ok(())
    }

    /// Recolor the stop at `index`, then re-sort
    pub fn recolor_stop(&mut self, index: usize, color: Rgb) -> Result<(), PaintError> {
        self.check_index(index)?;
        self.stops[index].color = color;
        self.resort();
        Ok(())
    }

    /// Remove the stop at `index`. Fails with
    /// [`PaintError::MinimumStops`] if that would leave fewer than two
    /// stops; the gradient is unchanged on failure.
    pub fn remove_stop(&mut self, index: usize) -> Result<Stop, PaintError> {
        self.check_index(index)?;
        if self.stops.len() <= 2 {
            return Err(PaintError::MinimumStops);
        }
        let removed = self.stops.remove(index);
        self.resort();
        Ok(removed)
    }

    /// Replace the colors of the sorted stop list pairwise, keeping the
    /// existing color where `colors` runs short. Positions are untouched.
    pub fn with_colors(&self, colors: &[Rgb]) -> LinearGradient {
        let mut stops = self.sorted_stops();
        for (stop, &color) in stops.iter_mut().zip(colors) {
            stop.color = color;
        }
        LinearGradient { stops }
    }

    fn check_index(&self, index: usize) -> Result<(), PaintError> {
        if index >= self.stops.len() {
            return Err(PaintError::StopIndexOutOfBounds {
                index,
                len: self.stops.len(),
            });
        }
        Ok(())
    }

    fn resort(&mut self) {
        self.stops.sort_by_key(|s| s.position);
    }
}
