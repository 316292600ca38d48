#![cfg_attr(not(feature = "std"), no_std)]

//! Non-blocking color fades for PWM-driven RGB LEDs.
//!
//! # Core Concepts
//!
//! - **`RgbFader`**: Controls one RGB LED through a queue of color changes and fades
//! - **`Command`**: One queued transition: target color, step count and duration
//! - **`CommandQueue`**: Fixed-capacity queue that replays from the start once it runs out
//! - **`TransitionEngine`**: Decides on each poll whether a step or completion is due
//! - **`PwmOutput`**: Trait to implement for your PWM hardware (or use `PwmRgb`)
//! - **`TimeInstant`** / **`TimeSource`**: Millisecond time, wraparound-safe
//! - **`FaderAction`**: Commands that can be sent to control a fader
//!
//! Colors are `Srgb<u16>` with every channel in `[0, write_range]`, where the write range
//! is chosen when the fader is created. Use [`colors`] to convert from floating-point or
//! HSV colors.
//!
//! ```ignore
//! let mut fader: RgbFader<u32, _, 8> =
//!     RgbFader::new(output, Channel::Red, Channel::Green, Channel::Blue, 255);
//! fader.fade_in(Srgb::new(255, 80, 0), 2000)?;
//! fader.fade_to(Srgb::new(0, 0, 255), 1000)?;
//! loop {
//!     fader.poll(millis());
//!     // other work
//! }
//! ```

pub use palette::Srgb;

pub mod action;
pub mod blocking;
pub mod clamp;
pub mod colors;
pub mod command;
pub mod engine;
pub mod fader;
pub mod output;
pub mod pwm;
pub mod queue;
pub mod time;
pub mod types;

pub use action::FaderAction;
pub use clamp::clamp;
pub use command::Command;
pub use engine::TransitionEngine;
pub use fader::RgbFader;
pub use output::{ColorSink, PwmOutput};
pub use pwm::{Channel, PwmRgb};
pub use queue::CommandQueue;
pub use time::{TimeInstant, TimeSource};
pub use types::{Enqueued, FaderError, PollTiming};

/// All channels off.
pub const BLACK: Srgb<u16> = Srgb::new(0, 0, 0);
