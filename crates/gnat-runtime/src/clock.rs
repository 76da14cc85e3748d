//! Tick clock: observed-tick counter plus the loop's blocking wait

use std::sync::{Arc, Condvar, Mutex};

#[derive(Default)]
struct ClockState {
    /// Hardware ticks observed so far. Monotonic, +1 per `tick()`.
    ticks: u64,
    /// Non-tick wakeups (key events). Monotonic, +1 per `pulse()`.
    pulses: u64,
}

struct ClockInner {
    state: Mutex<ClockState>,
    cond: Condvar,
}

/// The shared clock between the tick driver and the main loop.
///
/// The driver calls [`TickClock::tick`] once per hardware tick and
/// [`TickClock::pulse`] for other events that should resume a blocked
/// loop. The loop reads `observed` exactly once per wake, under the same
/// lock the driver writes it under, so the counter is never torn. The
/// `processed` counter is not here: it is owned exclusively by the loop.
#[derive(Clone)]
pub struct TickClock {
    inner: Arc<ClockInner>,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ClockInner {
                state: Mutex::new(ClockState::default()),
                cond: Condvar::new(),
            }),
        }
    }

    /// One hardware tick happened. Increments `observed` and wakes the
    /// loop. Never blocks on anything but the counter lock; never runs
    /// gameplay logic.
    pub fn tick(&self) {
        let mut state = self.inner.state.lock().unwrap();
        state.ticks += 1;
        self.inner.cond.notify_all();
    }

    /// Wake the loop without advancing time (e.g. a key event arrived).
    pub fn pulse(&self) {
        let mut state = self.inner.state.lock().unwrap();
        state.pulses += 1;
        self.inner.cond.notify_all();
    }

    /// The number of ticks observed so far.
    pub fn observed(&self) -> u64 {
        self.inner.state.lock().unwrap().ticks
    }

    /// Total wake events (ticks + pulses). Used as the wait stamp.
    pub fn events(&self) -> u64 {
        let state = self.inner.state.lock().unwrap();
        state.ticks + state.pulses
    }

    /// Block until the event count moves past `seen`; returns the new
    /// count. There is no timeout: if no event ever arrives this blocks
    /// forever, matching an idle-until-interrupt model.
    pub fn wait_for_event(&self, seen: u64) -> u64 {
        let mut state = self.inner.state.lock().unwrap();
        while state.ticks + state.pulses == seen {
            state = self.inner.cond.wait(state).unwrap();
        }
        state.ticks + state.pulses
    }
}
