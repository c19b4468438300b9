//! Shared state access across interrupt and control-loop contexts.
//!
//! Two pieces of state cross context boundaries: the IR receiver (written by
//! the edge and watchdog interrupts) and the vehicle outputs (written by the
//! control loop and the emergency-stop interrupt). Both sit behind this trait
//! so the logic that touches them can be tested on host.

/// Platform-agnostic synchronized state access.
///
/// - `EmbassyState<T>` (firmware crate) wraps a critical-section mutex
/// - `MockState<T>` wraps a `RefCell` for single-threaded tests
///
/// Closures passed to `with`/`with_mut` run inside the critical section on
/// target and must stay short.
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

/// `RefCell`-backed shared state for host tests.
///
/// # Panics
///
/// Panics on re-entrant mutable access, which indicates a bug in the test.
///
/// # Example
///
/// ```
/// use ir_rover_core::traits::{MockState, SharedState};
///
/// let index = MockState::new(0usize);
/// index.with_mut(|i| *i += 1);
/// assert_eq!(index.with(|i| *i), 1);
/// ```
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_mut_result_is_returned() {
        let state = MockState::new([0u8; 4]);
        let written = state.with_mut(|buf| {
            buf[2] = 7;
            buf.iter().filter(|b| **b != 0).count()
        });
        assert_eq!(written, 1);
        assert_eq!(state.into_inner(), [0, 0, 7, 0]);
    }
}
