//! Blocking playback on top of the polling fader.
//!
//! For applications with nothing else to do while a fade runs. The fader is polled and
//! the thread sleeps for the hinted time between polls, so timing stays exactly as in
//! the non-blocking case.

use crate::fader::RgbFader;
use crate::output::PwmOutput;
use crate::time::{TimeInstant, TimeSource};
use crate::types::PollTiming;
use embedded_hal::delay::DelayNs;

/// Plays the queued commands through once, sleeping between steps.
///
/// Returns when the last queued command has completed and the queue is back at its
/// first command, or right away if nothing is queued. The queue is left in place, so
/// calling again replays it.
pub fn play_once<I, P, T, D, const N: usize>(
    fader: &mut RgbFader<I, P, N>,
    source: &T,
    delay: &mut D,
) where
    I: TimeInstant,
    P: PwmOutput,
    T: TimeSource<I>,
    D: DelayNs,
{
    let start_cycles = fader.cycles();

    loop {
        match fader.poll_source(source) {
            PollTiming::Idle => return,
            PollTiming::Delay(_) if fader.cycles() != start_cycles => return,
            PollTiming::Delay(0) => {}
            PollTiming::Delay(ms) => delay.delay_ms(ms),
        }
    }
}
