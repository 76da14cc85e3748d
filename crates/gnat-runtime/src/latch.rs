//! Key event latch shared between the input driver and the main loop

use gnat_core::Key;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

struct LatchInner {
    pending: [AtomicBool; Key::COUNT],
    last_code: AtomicI32,
    scan_codes: [i32; Key::COUNT],
}

/// Records the most recent asynchronous key events.
///
/// `notify` runs on the input driver's context, `query`/`consume` on the
/// main loop. The driver only ever touches these primitive flags, never
/// the richer simulation state, so plain atomics suffice.
#[derive(Clone)]
pub struct EventLatch {
    inner: Arc<LatchInner>,
}

impl EventLatch {
    /// Create a latch with one pending slot per logical key, mapped to
    /// the given raw scan codes (in [`Key::ALL`] order).
    pub fn new(scan_codes: [i32; Key::COUNT]) -> Self {
        Self {
            inner: Arc::new(LatchInner {
                pending: Default::default(),
                last_code: AtomicI32::new(0),
                scan_codes,
            }),
        }
    }

    /// Record a raw key event. Sets the pending flag for every logical
    /// key whose scan code matches. Never blocks.
    pub fn notify(&self, code: i32) {
        self.inner.last_code.store(code, Ordering::Relaxed);
        for key in Key::ALL {
            if self.inner.scan_codes[key.index()] == code {
                self.inner.pending[key.index()].store(true, Ordering::SeqCst);
            }
        }
    }

    /// Is this key's event still pending? No side effect.
    pub fn query(&self, key: Key) -> bool {
        self.inner.pending[key.index()].load(Ordering::SeqCst)
    }

    /// Clear the pending flag, called once when the loop acts on the key.
    pub fn consume(&self, key: Key) {
        self.inner.pending[key.index()].store(false, Ordering::SeqCst);
    }

    /// The raw code of the most recent event. Diagnostic only.
    pub fn last_raw_code(&self) -> i32 {
        self.inner.last_code.load(Ordering::Relaxed)
    }
}
