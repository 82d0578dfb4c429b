//! At most one in-flight submission per form.

use std::cell::Cell;
use std::rc::Rc;

/// Shared busy flag for one form binding.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

/// Held for the lifetime of a request; clears the flag when dropped.
#[derive(Debug)]
pub struct InFlightGuard(Rc<Cell<bool>>);

impl InFlight {
    /// Marks the form busy, or returns `None` if a request is already running.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.0.replace(true) {
            None
        } else {
            Some(InFlightGuard(Rc::clone(&self.0)))
        }
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.0.get()
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
