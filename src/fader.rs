//! RGB LED fader with a cyclic command queue.
//!
//! Provides [`RgbFader`], which owns one RGB output, the queue of pending color
//! transitions and the timer state of the one currently running. Nothing happens between
//! calls: the application polls the fader from its main loop and each poll does a bounded
//! amount of work.

use crate::BLACK;
use crate::action::FaderAction;
use crate::command::Command;
use crate::engine::TransitionEngine;
use crate::output::{ColorSink, PwmOutput};
use crate::queue::CommandQueue;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{Enqueued, FaderError, PollTiming};
use palette::Srgb;

/// Controls a single RGB LED through queued color changes and fades.
///
/// Commands are appended with [`enqueue`](Self::enqueue) or one of its wrappers and run
/// in order as the fader is polled. Once the last command completes the queue starts
/// over from the first, until it is [`reset`](Self::reset) or replaced by
/// [`change_to`](Self::change_to).
///
/// Each fade is computed against the color that will be showing when it starts: the
/// previous command's target, or the live color when the queue is empty. Its step count
/// is capped at the largest channel difference, so no two steps emit the same color.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `P` - PWM output implementation type
/// * `N` - Maximum number of queued commands
pub struct RgbFader<I: TimeInstant, P: PwmOutput, const N: usize> {
    sink: ColorSink<P>,
    queue: CommandQueue<N>,
    engine: TransitionEngine<I>,
}

impl<I: TimeInstant, P: PwmOutput, const N: usize> RgbFader<I, P, N> {
    /// Creates an idle fader with the LED turned off.
    ///
    /// `write_range` is the highest channel intensity; it is raised to 1 if zero and
    /// passed to the output before anything is written.
    pub fn new(
        output: P,
        red: P::Channel,
        green: P::Channel,
        blue: P::Channel,
        write_range: u16,
    ) -> Self {
        Self {
            sink: ColorSink::new(output, red, green, blue, write_range),
            queue: CommandQueue::new(),
            engine: TransitionEngine::new(),
        }
    }

    /// Handles a fader action by dispatching to the matching method.
    ///
    /// `ChangeTo` and `Reset` act immediately and report `Enqueued::Applied`.
    pub fn handle_action(&mut self, action: FaderAction) -> Result<Enqueued, FaderError> {
        match action {
            FaderAction::ChangeTo(color) => {
                self.change_to(color);
                Ok(Enqueued::Applied)
            }
            FaderAction::ChangeToFor { color, duration } => self.change_to_for(color, duration),
            FaderAction::FadeTo { color, duration } => self.fade_to(color, duration),
            FaderAction::FadeToSteps {
                color,
                steps,
                duration,
            } => self.fade_to_steps(color, steps, duration),
            FaderAction::FadeIn { color, duration } => self.fade_in(color, duration),
            FaderAction::FadeInSteps {
                color,
                steps,
                duration,
            } => self.fade_in_steps(color, steps, duration),
            FaderAction::FadeOut { color, duration } => self.fade_out(color, duration),
            FaderAction::FadeOutSteps {
                color,
                steps,
                duration,
            } => self.fade_out_steps(color, steps, duration),
            FaderAction::Reset => {
                self.reset();
                Ok(Enqueued::Applied)
            }
        }
    }

    /// Queues a transition to `target` in at most `steps` steps over `duration` ms.
    ///
    /// The target is clamped to the write range and `steps` to the largest channel
    /// difference from the baseline color. If that leaves no steps the call does nothing
    /// and returns `Enqueued::Discarded`; the existing queue is untouched.
    ///
    /// # Errors
    /// * `QueueFull` - The command would be queued but there is no room
    pub fn enqueue(
        &mut self,
        target: Srgb<u16>,
        steps: u32,
        duration: u32,
    ) -> Result<Enqueued, FaderError> {
        let target = self.clamp_color(target);
        let baseline = self
            .queue
            .last()
            .map_or(self.sink.active_color(), Command::target);

        let Some(command) = Command::transition(baseline, target, steps, duration) else {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "discarding command to r={} g={} b={}: no change",
                target.red,
                target.green,
                target.blue
            );
            return Ok(Enqueued::Discarded);
        };

        self.queue.append(command)?;

        #[cfg(feature = "defmt")]
        {
            let [r, g, b] = command.coefficients();
            defmt::debug!(
                "queued {} steps over {}ms, coefficients r={} g={} b={}",
                command.steps(),
                command.duration(),
                r,
                g,
                b
            );
        }

        Ok(Enqueued::Queued)
    }

    /// Clears the queue and sets the LED to `color` immediately.
    ///
    /// Any running transition is abandoned where it is. No poll is needed for the new
    /// color to show.
    pub fn change_to(&mut self, color: Srgb<u16>) {
        self.reset();
        self.sink
            .set_color(color.red.into(), color.green.into(), color.blue.into());
    }

    /// Queues an instant change to `color`, held for `duration` ms.
    pub fn change_to_for(
        &mut self,
        color: Srgb<u16>,
        duration: u32,
    ) -> Result<Enqueued, FaderError> {
        self.enqueue(color, 1, duration)
    }

    /// Queues a fade to `color` at the finest resolution the color difference allows.
    pub fn fade_to(&mut self, color: Srgb<u16>, duration: u32) -> Result<Enqueued, FaderError> {
        self.enqueue(color, u32::from(self.sink.write_range()), duration)
    }

    /// Queues a fade to `color` in at most `steps` steps.
    pub fn fade_to_steps(
        &mut self,
        color: Srgb<u16>,
        steps: u32,
        duration: u32,
    ) -> Result<Enqueued, FaderError> {
        self.enqueue(color, steps, duration)
    }

    /// Queues a snap to black followed by a full-resolution fade up to `color`.
    pub fn fade_in(&mut self, color: Srgb<u16>, duration: u32) -> Result<Enqueued, FaderError> {
        self.fade_in_steps(color, u32::from(self.sink.write_range()), duration)
    }

    /// Queues a snap to black followed by a fade up to `color` in at most `steps` steps.
    ///
    /// The snap is always queued; the returned outcome is that of the fade.
    ///
    /// # Errors
    /// * `QueueFull` - Fewer than two free slots; nothing is queued. Two slots are required
    ///   even when the fade itself turns out to be discarded, since capacity is checked first.
    pub fn fade_in_steps(
        &mut self,
        color: Srgb<u16>,
        steps: u32,
        duration: u32,
    ) -> Result<Enqueued, FaderError> {
        if self.queue.remaining_capacity() < 2 {
            return Err(FaderError::QueueFull);
        }
        self.queue.append(Command::snap(BLACK))?;
        self.enqueue(color, steps, duration)
    }

    /// Queues a snap to `color` followed by a full-resolution fade down to black.
    pub fn fade_out(&mut self, color: Srgb<u16>, duration: u32) -> Result<Enqueued, FaderError> {
        self.fade_out_steps(color, u32::from(self.sink.write_range()), duration)
    }

    /// Queues a snap to `color` followed by a fade down to black in at most `steps` steps.
    ///
    /// `color` is clamped to the write range. The snap is always queued; the returned
    /// outcome is that of the fade.
    ///
    /// # Errors
    /// * `QueueFull` - Fewer than two free slots; nothing is queued. Two slots are required
    ///   even when the fade itself turns out to be discarded, since capacity is checked first.
    pub fn fade_out_steps(
        &mut self,
        color: Srgb<u16>,
        steps: u32,
        duration: u32,
    ) -> Result<Enqueued, FaderError> {
        if self.queue.remaining_capacity() < 2 {
            return Err(FaderError::QueueFull);
        }
        let from = self.clamp_color(color);
        self.queue.append(Command::snap(from))?;
        self.enqueue(BLACK, steps, duration)
    }

    /// Advances the current transition to `now`, writing the LED if a boundary passed.
    ///
    /// Never blocks. Call it as often as convenient; the returned [`PollTiming`] says how
    /// long the fader can be left alone without missing a step.
    pub fn poll(&mut self, now: I) -> PollTiming {
        let tick = self.engine.poll(&mut self.queue, now);
        if let Some([red, green, blue]) = tick.emit {
            self.sink.update(red, green, blue);
        }
        tick.timing
    }

    /// Polls with the current time of `source`.
    pub fn poll_source<T: TimeSource<I>>(&mut self, source: &T) -> PollTiming {
        self.poll(source.now())
    }

    /// Drops all queued commands and stops the running transition.
    ///
    /// The LED keeps showing its last color.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.engine.stop();

        #[cfg(feature = "defmt")]
        defmt::debug!("fader reset");
    }

    /// Logs the current color, queue position and step index.
    #[cfg(feature = "defmt")]
    pub fn info(&self) {
        let color = self.sink.active_color();
        defmt::info!(
            "color r={} g={} b={}, command {}/{}, step {}, cycles {}",
            color.red,
            color.green,
            color.blue,
            self.queue.cursor(),
            self.queue.len(),
            self.engine.transition_index(),
            self.queue.cycles()
        );
    }

    /// Returns the color currently shown on the LED.
    pub fn active_color(&self) -> Srgb<u16> {
        self.sink.active_color()
    }

    /// Returns the maximum channel intensity.
    pub fn write_range(&self) -> u16 {
        self.sink.write_range()
    }

    /// Returns all queued commands in execution order.
    pub fn queued(&self) -> &[Command] {
        self.queue.as_slice()
    }

    /// Returns the command that runs on the next poll.
    pub fn current_command(&self) -> Option<&Command> {
        self.queue.current()
    }

    /// Returns the index of the current command in the queue.
    pub fn cursor(&self) -> usize {
        self.queue.cursor()
    }

    /// Returns the index of the next step within the current command.
    pub fn transition_index(&self) -> u32 {
        self.engine.transition_index()
    }

    /// Returns how many full passes through the queue have completed.
    pub fn cycles(&self) -> u32 {
        self.queue.cycles()
    }

    /// Returns true if a command has started and not yet completed.
    pub fn is_transitioning(&self) -> bool {
        self.engine.is_running()
    }

    /// Returns true if no commands are queued.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns a reference to the PWM output.
    pub fn output(&self) -> &P {
        self.sink.output()
    }

    /// Consumes the fader and returns the PWM output.
    pub fn release(self) -> P {
        self.sink.release()
    }

    fn clamp_color(&self, color: Srgb<u16>) -> Srgb<u16> {
        let range = self.sink.write_range();
        Srgb::new(
            crate::clamp::clamp(color.red, 0, range),
            crate::clamp::clamp(color.green, 0, range),
            crate::clamp::clamp(color.blue, 0, range),
        )
    }
}
