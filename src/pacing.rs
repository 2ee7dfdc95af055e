//! Presentation pacing.
//!
//! The engine pauses at a few points (hole-card reveal, each dealer draw,
//! the outcome banner) so a front end can animate. Pauses never gate
//! correctness: with [`NoDelay`] a whole round runs without waiting.

use core::time::Duration;

/// Performs the engine's presentation pauses.
pub trait Pacer {
    /// Waits for `duration`, or not at all.
    fn pause(&mut self, duration: Duration);
}

/// Pacer that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

/// Pacer that blocks the current thread.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

#[cfg(feature = "std")]
impl Pacer for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<T: Pacer + ?Sized> Pacer for &mut T {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}
