//! Critical-section backed `SharedState`

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use ir_rover_core::traits::SharedState;

/// Embassy-based synchronized state using critical-section Mutex.
///
/// The critical section masks interrupts, so access is atomic with respect
/// to the interrupt executors as well as the thread-mode control loop.
/// `new` is `const`, allowing static initialization.
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

impl<T> EmbassyState<T> {
    /// Creates a new `EmbassyState` wrapping the given value.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}
