//! Gradient transition state machine
//!
//! Drives the displayed gradient through a generation request:
//!
//! ```text
//! Idle -> PreResponse -> Settling -> Idle
//! ```
//!
//! PreResponse hue-cycles a snapshot of whatever was displayed when the
//! request started, looping until the external result arrives. Settling
//! is a fixed-duration eased interpolation from the mid-rotation colors
//! toward the result, snapping exactly onto the target at the end.
//!
//! Overlapping requests are resolved by a monotonic generation counter
//! owned by the controller instance: every resolve/fail carries the
//! generation it belongs to, and anything stale is discarded without
//! touching state. Last request wins; the async call itself needs no
//! cancellation token.

use gradia_color::Rgb;
use gradia_paint::Gradient;
use thiserror::Error;
use tracing::debug;

use crate::easing::Easing;

/// Transition tuning; the defaults are the product's shipped values
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionConfig {
    /// Hue-cycle speed while waiting, degrees per millisecond
    pub hue_speed_deg_per_ms: f64,
    /// Settling duration in milliseconds
    pub settle_duration_ms: f64,
    /// Settling progress curve
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            hue_speed_deg_per_ms: 0.08,
            settle_duration_ms: 600.0,
            easing: Easing::EaseInOutCubic,
        }
    }
}

/// Public view of the controller's state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PreResponse,
    Settling,
}

/// Whether a resolve/fail applied or lost to a newer request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Applied {
    Current,
    Superseded,
}

/// Errors surfaced to the caller for display
#[derive(Error, Debug)]
pub enum TransitionError {
    /// The external generation collaborator failed; the pre-request
    /// snapshot has already been restored
    #[error("gradient generation failed")]
    ExternalGenerationFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Per-request transition state; discarded on completion or supersession
struct GradientTransition {
    generation_id: u64,
    snapshot: Gradient,
    phase: TransitionPhase,
}

enum TransitionPhase {
    PreResponse {
        started_ms: f64,
    },
    Settling {
        started_ms: f64,
        start_colors: Vec<Rgb>,
        target: Gradient,
    },
}

/// The transition state machine
pub struct TransitionController {
    config: TransitionConfig,
    generation: u64,
    displayed: Gradient,
    transition: Option<GradientTransition>,
}

impl TransitionController {
    pub fn new(initial: Gradient) -> Self {
        Self::with_config(initial, TransitionConfig::default())
    }

    pub fn with_config(initial: Gradient, config: TransitionConfig) -> Self {
        Self {
            config,
            generation: 0,
            displayed: initial,
            transition: None,
        }
    }

    /// The gradient the host should currently paint
    pub fn displayed(&self) -> &Gradient {
        &self.displayed
    }

    /// Replace the displayed gradient (caller edits while idle)
    pub fn set_displayed(&mut self, gradient: Gradient) {
        self.displayed = gradient;
    }

    pub fn phase(&self) -> Phase {
        match &self.transition {
            None => Phase::Idle,
            Some(t) => match t.phase {
                TransitionPhase::PreResponse { .. } => Phase::PreResponse,
                TransitionPhase::Settling { .. } => Phase::Settling,
            },
        }
    }

    /// The most recently issued generation id
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    /// Start a new generation request: bump the generation counter,
    /// snapshot the currently displayed gradient, and enter PreResponse.
    /// Any in-flight transition is superseded on the spot.
    ///
    /// The returned id must accompany the eventual [`resolve`](Self::resolve)
    /// or [`fail`](Self::fail) call.
    pub fn begin_generation(&mut self, now_ms: f64) -> u64 {
        self.generation += 1;
        let id = self.generation;
        self.transition = Some(GradientTransition {
            generation_id: id,
            snapshot: self.displayed.clone(),
            phase: TransitionPhase::PreResponse { started_ms: now_ms },
        });
        debug!(generation = id, "generation request started");
        id
    }

    /// Advance the animation to `now_ms`. Returns whether a transition is
    /// still running (the host keeps scheduling ticks while true).
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(transition) = self.transition.take() else {
            return false;
        };
        if transition.generation_id != self.generation {
            debug!(
                generation = transition.generation_id,
                current = self.generation,
                "dropping superseded transition"
            );
            return false;
        }

        match &transition.phase {
            TransitionPhase::PreResponse { started_ms } => {
                let elapsed = (now_ms - started_ms).max(0.0);
                let hue_offset = (elapsed * self.config.hue_speed_deg_per_ms) % 360.0;
                self.displayed = transition.snapshot.rotate_hue(hue_offset as f32);
                self.transition = Some(transition);
                true
            }
            TransitionPhase::Settling {
                started_ms,
                start_colors,
                target,
            } => {
                let progress = (now_ms - started_ms) / self.config.settle_duration_ms;
                if progress >= 1.0 {
                    // Snap exactly onto the target, not the eased approximation
                    self.displayed = target.clone();
                    debug!(generation = transition.generation_id, "transition settled");
                    false
                } else {
                    let eased = self.config.easing.apply(progress.max(0.0) as f32);
                    let blended: Vec<Rgb> = start_colors
                        .iter()
                        .zip(target.colors())
                        .map(|(&from, to)| Rgb::lerp(from, to, eased))
                        .collect();
                    self.displayed = target.with_colors(&blended);
                    self.transition = Some(transition);
                    true
                }
            }
        }
    }

    /// Deliver the external result for `generation`.
    ///
    /// If a newer request has started the result is discarded whole —
    /// no display update, no state change. Otherwise the controller
    /// captures the currently displayed (mid-rotation) colors as the
    /// settling start and begins easing toward `target`.
    pub fn resolve(&mut self, generation: u64, target: Gradient, now_ms: f64) -> Applied {
        if generation != self.generation || self.transition.is_none() {
            debug!(
                generation,
                current = self.generation,
                "discarding stale generation result"
            );
            return Applied::Superseded;
        }

        // Settling colors pair up with the target's color slots: the start
        // color for each slot is the displayed gradient sampled at that
        // slot's position. Geometry comes from the target throughout.
        let start_colors: Vec<Rgb> = target
            .color_positions()
            .iter()
            .map(|&p| self.displayed.sample(p))
            .collect();

        debug!(generation, kind = target.kind(), "settling toward result");
        self.transition = Some(GradientTransition {
            generation_id: generation,
            snapshot: self
                .transition
                .take()
                .map(|t| t.snapshot)
                .unwrap_or_else(|| self.displayed.clone()),
            phase: TransitionPhase::Settling {
                started_ms: now_ms,
                start_colors,
                target,
            },
        });
        Applied::Current
    }

    /// Deliver an external failure for `generation`.
    ///
    /// Stale failures are swallowed. A current failure restores the
    /// pre-request snapshot verbatim and hands the caller the error to
    /// display; the screen never keeps a partially rotated gradient.
    pub fn fail(
        &mut self,
        generation: u64,
        error: Box<dyn std::error::Error + Send + Sync>,
    ) -> Result<(), TransitionError> {
        match self.transition.take() {
            Some(transition) if generation == self.generation => {
                self.displayed = transition.snapshot;
                debug!(generation, "generation failed, snapshot restored");
                Err(TransitionError::ExternalGenerationFailed(error))
            }
            other => {
                self.transition = other;
                debug!(
                    generation,
                    current = self.generation,
                    "discarding stale generation failure"
                );
                Ok(())
            }
        }
    }
}
