//! Tick scheduling
//!
//! The host drives animation through repeated scheduled callbacks; the
//! engine never owns a display loop. [`TickScheduler`] is the contract a
//! host adapts its frame loop to, and [`ManualScheduler`] is the
//! in-process implementation used by tests and headless callers: frames
//! run only when `run_frame` is called, with whatever timestamp the
//! caller fabricates.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled tick callback
    pub struct TickHandle;
}

/// A tick callback; receives the current timestamp in milliseconds
pub type TickCallback = Box<dyn FnMut(f64)>;

/// Cooperative frame scheduling contract
pub trait TickScheduler {
    /// Register a callback to run on every frame until cancelled
    fn schedule(&mut self, callback: TickCallback) -> TickHandle;

    /// Stop a previously scheduled callback; unknown handles are ignored
    fn cancel(&mut self, handle: TickHandle);
}

/// Scheduler driven explicitly by the caller
#[derive(Default)]
pub struct ManualScheduler {
    callbacks: SlotMap<TickHandle, TickCallback>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every registered callback with the given timestamp
    pub fn run_frame(&mut self, now_ms: f64) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(now_ms);
        }
    }

    /// Number of live callbacks
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, callback: TickCallback) -> TickHandle {
        self.callbacks.insert(callback)
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.callbacks.remove(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn scheduled_callbacks_receive_fabricated_timestamps() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Box::new(move |now| sink.borrow_mut().push(now)));

        scheduler.run_frame(16.0);
        scheduler.run_frame(32.5);
        assert_eq!(*seen.borrow(), vec![16.0, 32.5]);
    }

    #[test]
    fn cancelled_callbacks_stop_running() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Box::new(move |_| *sink.borrow_mut() += 1));

        scheduler.run_frame(0.0);
        scheduler.cancel(handle);
        scheduler.run_frame(16.0);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(scheduler.callback_count(), 0);
    }

    #[test]
    fn cancelling_twice_is_a_no_op() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Box::new(|_| {}));
        scheduler.cancel(handle);
        scheduler.cancel(handle);
    }
}
