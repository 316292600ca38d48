//! Time abstraction traits for platform-agnostic timing.
//!
//! The fader works on whole milliseconds. Instants are free-running counters that may
//! wrap, so elapsed time is always computed by wrapping subtraction rather than by adding
//! a duration to a start instant.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for millisecond instants.
pub trait TimeInstant: Copy {
    /// Milliseconds elapsed since an earlier instant.
    ///
    /// Must tolerate counter wraparound: an instant taken just after the counter
    /// overflowed is still "later" than one taken just before it.
    fn millis_since(&self, earlier: Self) -> u32;
}

impl TimeInstant for u32 {
    #[inline]
    fn millis_since(&self, earlier: Self) -> u32 {
        self.wrapping_sub(earlier)
    }
}

impl TimeInstant for u64 {
    #[inline]
    fn millis_since(&self, earlier: Self) -> u32 {
        let elapsed = self.wrapping_sub(earlier);
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }
}
