use std::time::Instant;

/// Source of the current instant, in milliseconds since an arbitrary fixed origin.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Monotonic clock anchored at construction time.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // u64 milliseconds covers far more than any process lifetime
        self.origin.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;

#[cfg(test)]
mod manual {
    use super::Clock;

    use std::{cell::Cell, rc::Rc};

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Clone, Default)]
    pub(crate) struct ManualClock {
        now: Rc<Cell<u64>>,
    }

    impl ManualClock {
        pub(crate) fn starting_at(now: u64) -> ManualClock {
            ManualClock {
                now: Rc::new(Cell::new(now)),
            }
        }

        pub(crate) fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }

        pub(crate) fn rewind(&self, ms: u64) {
            self.now.set(self.now.get().saturating_sub(ms));
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
    }
}
