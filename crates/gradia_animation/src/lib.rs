//! Gradia Transition System
//!
//! Animates the displayed gradient across a generation request's
//! lifetime:
//!
//! - **PreResponse**: continuous hue cycling of a snapshot while the
//!   external prompt-to-gradient call is in flight
//! - **Settling**: a fixed 600ms eased interpolation onto the result,
//!   snapping exactly onto the target at the end
//! - **Supersession**: a monotonic generation counter makes rapid
//!   repeated requests safe — stale results and failures are discarded
//!   without touching the display
//!
//! Ticks are driven by elapsed wall-clock time supplied by the host, so
//! animation speed is frame-rate independent and tests can fabricate
//! timestamps through [`ManualScheduler`].
//!
//! # Example
//!
//! ```rust
//! use gradia_animation::{Applied, TransitionController};
//! use gradia_color::Rgb;
//! use gradia_paint::{Gradient, LinearGradient};
//!
//! let start = Gradient::Linear(LinearGradient::from_colors(&[Rgb::BLACK, Rgb::WHITE]).unwrap());
//! let result = Gradient::Linear(LinearGradient::from_colors(&[Rgb::RED, Rgb::BLUE]).unwrap());
//!
//! let mut controller = TransitionController::new(start);
//! let generation = controller.begin_generation(0.0);
//! controller.tick(16.0); // hue-cycles while waiting
//!
//! assert_eq!(controller.resolve(generation, result.clone(), 16.0), Applied::Current);
//! while controller.tick(1000.0) {}
//! assert_eq!(controller.displayed(), &result);
//! ```

pub mod easing;
pub mod scheduler;
pub mod transition;

pub use easing::Easing;
pub use scheduler::{ManualScheduler, TickCallback, TickHandle, TickScheduler};
pub use transition::{Applied, Phase, TransitionConfig, TransitionController, TransitionError};
