//! Cancellable Debounce
//!
//! Owned timer handle: each `call` replaces (and thereby cancels) the
//! previous pending timer, so a burst of calls inside the window fires the
//! trailing callback exactly once. Dropping the debouncer cancels any
//! pending callback. The timer source is a trait so the replace/cancel
//! behavior runs under plain `cargo test`.

use gloo_timers::callback::Timeout;

/// Arms a one-shot timer; the returned handle cancels it on drop.
pub trait TimerSpawner {
    type Handle;
    fn spawn(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `gloo`.
pub struct WebTimers;

impl TimerSpawner for WebTimers {
    type Handle = Timeout;

    fn spawn(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, f)
    }
}

pub struct Debouncer<S: TimerSpawner = WebTimers> {
    delay_ms: u32,
    timers: S,
    pending: Option<S::Handle>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self::with_timers(delay_ms, WebTimers)
    }
}

impl<S: TimerSpawner> Debouncer<S> {
    pub fn with_timers(delay_ms: u32, timers: S) -> Self {
        Self {
            delay_ms,
            timers,
            pending: None,
        }
    }

    /// Schedule `f` after the delay, cancelling any previously scheduled call.
    pub fn call(&mut self, f: impl FnOnce() + 'static) {
        // Replacing the handle drops the old timer, which clears it
        self.pending = Some(self.timers.spawn(self.delay_ms, Box::new(f)));
    }

    /// Cancel the pending call, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct ArmedTimer {
        callback: Box<dyn FnOnce()>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Clone, Default)]
    struct FakeTimers {
        armed: Rc<RefCell<Vec<ArmedTimer>>>,
    }

    struct FakeHandle(Rc<Cell<bool>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl TimerSpawner for FakeTimers {
        type Handle = FakeHandle;

        fn spawn(&self, _delay_ms: u32, f: Box<dyn FnOnce()>) -> FakeHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.armed.borrow_mut().push(ArmedTimer {
                callback: f,
                cancelled: cancelled.clone(),
            });
            FakeHandle(cancelled)
        }
    }

    impl FakeTimers {
        /// Let every armed timer elapse; returns how many actually fired.
        fn fire_elapsed(&self) -> usize {
            let timers: Vec<ArmedTimer> = self.armed.borrow_mut().drain(..).collect();
            let mut fired = 0;
            for timer in timers {
                if !timer.cancelled.get() {
                    (timer.callback)();
                    fired += 1;
                }
            }
            fired
        }
    }

    #[test]
    fn test_burst_fires_trailing_call_once() {
        let timers = FakeTimers::default();
        let mut debounce = Debouncer::with_timers(500, timers.clone());
        let sent: Rc<RefCell<Vec<&str>>> = Rc::default();

        // Three keystrokes inside the window: only the last note text goes out
        for text in ["g", "gi", "gift"] {
            let sent = sent.clone();
            debounce.call(move || sent.borrow_mut().push(text));
        }

        assert_eq!(timers.fire_elapsed(), 1);
        assert_eq!(*sent.borrow(), vec!["gift"]);
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let timers = FakeTimers::default();
        let mut debounce = Debouncer::with_timers(500, timers.clone());
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        debounce.call(move || flag.set(true));
        debounce.cancel();

        assert_eq!(timers.fire_elapsed(), 0);
        assert!(!fired.get());
    }
}
