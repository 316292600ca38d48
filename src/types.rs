//! Shared result and error types.

/// Outcome of a successful enqueue call or dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Enqueued {
    /// The command was appended to the queue.
    Queued,

    /// The target equals the baseline color, so no steps remained and nothing was queued.
    Discarded,

    /// The action took effect immediately without touching the queue (`ChangeTo`, `Reset`).
    Applied,
}

/// When the fader needs to be polled again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollTiming {
    /// The queue is empty. Nothing happens until a command is enqueued.
    Idle,

    /// Milliseconds until the next step or completion boundary.
    ///
    /// `Delay(0)` means a poll right away would make progress. Polling earlier than
    /// the hint is always safe, it just does nothing.
    Delay(u32),
}

/// Errors that can occur when queueing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaderError {
    /// The command queue has no room left for the requested command(s).
    QueueFull,
}

impl core::fmt::Display for FaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FaderError::QueueFull => write!(f, "command queue is full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FaderError {}
