//! Poll-driven transition state machine.
//!
//! The engine never reads a clock and never sleeps. Each call to
//! [`TransitionEngine::poll`] looks at the command under the queue cursor, compares the
//! elapsed time against that command's step and completion boundaries and reports at
//! most one color to emit.

use crate::queue::CommandQueue;
use crate::time::TimeInstant;
use crate::types::PollTiming;

/// Result of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Channel values to write, if a boundary was crossed.
    pub emit: Option<[i32; 3]>,
    /// When polling again could make progress.
    pub timing: PollTiming,
}

impl Tick {
    const IDLE: Self = Self {
        emit: None,
        timing: PollTiming::Idle,
    };
}

/// Timer state for the command under the queue cursor.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEngine<I: TimeInstant> {
    start_time: Option<I>,
    transition_index: u32,
}

impl<I: TimeInstant> TransitionEngine<I> {
    /// Creates an engine with no transition in progress.
    pub const fn new() -> Self {
        Self {
            start_time: None,
            transition_index: 1,
        }
    }

    /// Advances the current command of `queue` to `now`.
    ///
    /// Emits the exact target once `now` is past the command's duration (or at once for
    /// zero-duration commands), then moves the cursor on. Within the duration, immediate
    /// commands re-emit their target every tick and fades emit the next step once its
    /// boundary has passed, one step per call.
    pub fn poll<const N: usize>(&mut self, queue: &mut CommandQueue<N>, now: I) -> Tick {
        let Some(command) = queue.current().copied() else {
            return Tick::IDLE;
        };

        let start = match self.start_time {
            Some(start) => start,
            None => {
                self.start_time = Some(now);
                self.transition_index = 1;
                now
            }
        };

        let elapsed = now.millis_since(start);
        let duration = command.duration();
        let target = command.target();
        let target = [
            i32::from(target.red),
            i32::from(target.green),
            i32::from(target.blue),
        ];

        if duration == 0 || elapsed > duration {
            self.stop();
            queue.advance();
            return Tick {
                emit: Some(target),
                timing: PollTiming::Delay(0),
            };
        }

        let until_complete = (duration - elapsed).saturating_add(1);

        if command.is_immediate() {
            return Tick {
                emit: Some(target),
                timing: PollTiming::Delay(until_complete),
            };
        }

        let mut emit = None;
        if self.transition_index < command.steps()
            && u64::from(elapsed) > command.step_boundary(self.transition_index)
        {
            emit = Some(command.color_at_step(self.transition_index));
            self.transition_index += 1;
        }

        let until_step = if self.transition_index < command.steps() {
            let due = command.step_boundary(self.transition_index) + 1;
            due.saturating_sub(u64::from(elapsed))
        } else {
            u64::MAX
        };

        let wait = until_step.min(u64::from(until_complete)) as u32;
        Tick {
            emit,
            timing: PollTiming::Delay(wait),
        }
    }

    /// Abandons the in-flight transition. The next poll starts the current command afresh.
    pub fn stop(&mut self) {
        self.start_time = None;
        self.transition_index = 1;
    }

    /// True while a command has been started and not yet completed.
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    /// Instant at which the current command started.
    pub fn start_time(&self) -> Option<I> {
        self.start_time
    }

    /// Index of the next step to emit within the current command.
    pub fn transition_index(&self) -> u32 {
        self.transition_index
    }
}

impl<I: TimeInstant> Default for TransitionEngine<I> {
    fn default() -> Self {
        Self::new()
    }
}
