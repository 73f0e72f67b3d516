//! Trailing-edge debounce.
//!
//! Each call restarts the wait; when the wait elapses without another call
//! the wrapped function runs once with the arguments of the last call.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

/// Schedules one-shot callbacks. Dropping the returned handle cancels the
/// callback if it has not fired yet.
pub trait TimerPort {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` via gloo; dropping a [`Timeout`] clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimers;

impl TimerPort for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

struct State<A, P: TimerPort> {
    func: RefCell<Box<dyn FnMut(A)>>,
    wait_ms: u32,
    timers: P,
    // Replaced on every call; the drop cancels the previous timer.
    pending: RefCell<Option<P::Handle>>,
    generation: Cell<u64>,
}

pub struct Debounced<A, P: TimerPort = GlooTimers> {
    state: Rc<State<A, P>>,
}

impl<A, P: TimerPort> Clone for Debounced<A, P> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

/// Debounce `func` on the browser timer.
pub fn debounce<A, F>(wait_ms: u32, func: F) -> Debounced<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Debounced::with_timers(wait_ms, GlooTimers, func)
}

impl<A: 'static, P: TimerPort + 'static> Debounced<A, P> {
    pub fn with_timers<F>(wait_ms: u32, timers: P, func: F) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self {
            state: Rc::new(State {
                func: RefCell::new(Box::new(func)),
                wait_ms,
                timers,
                pending: RefCell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    pub fn call(&self, args: A) {
        let generation = self.state.generation.get() + 1;
        self.state.generation.set(generation);

        let weak: Weak<State<A, P>> = Rc::downgrade(&self.state);
        let handle = self.state.timers.schedule(
            self.state.wait_ms,
            Box::new(move || {
                let Some(state) = weak.upgrade() else { return };
                // A stale timer that slipped past cancellation must not fire.
                if state.generation.get() != generation {
                    return;
                }
                let mut func = state.func.borrow_mut();
                (*func)(args);
            }),
        );

        // Assign after scheduling so the old handle is dropped (cancelled)
        // outside of any borrow the new timer could need.
        let previous = self.state.pending.replace(Some(handle));
        drop(previous);
    }

    /// Drop any pending call without running it.
    pub fn cancel(&self) {
        self.state.generation.set(self.state.generation.get() + 1);
        let previous = self.state.pending.take();
        drop(previous);
    }
}
