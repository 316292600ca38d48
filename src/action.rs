//! Command-based control for faders.
//!
//! Lets a task receive [`FaderAction`]s over a channel and hand them to
//! [`RgbFader::handle_action`](crate::RgbFader::handle_action) instead of calling the
//! fader methods directly. Durations are in milliseconds.

use palette::Srgb;

/// Actions for controlling a fader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaderAction {
    /// Clear the queue and set the color right away.
    ChangeTo(Srgb<u16>),
    /// Queue an instant change held for `duration`.
    ChangeToFor { color: Srgb<u16>, duration: u32 },
    /// Queue a fade at full resolution.
    FadeTo { color: Srgb<u16>, duration: u32 },
    /// Queue a fade with at most `steps` steps.
    FadeToSteps {
        color: Srgb<u16>,
        steps: u32,
        duration: u32,
    },
    /// Queue a snap to black followed by a fade up to `color`.
    FadeIn { color: Srgb<u16>, duration: u32 },
    /// Like `FadeIn`, with at most `steps` steps.
    FadeInSteps {
        color: Srgb<u16>,
        steps: u32,
        duration: u32,
    },
    /// Queue a snap to `color` followed by a fade down to black.
    FadeOut { color: Srgb<u16>, duration: u32 },
    /// Like `FadeOut`, with at most `steps` steps.
    FadeOutSteps {
        color: Srgb<u16>,
        steps: u32,
        duration: u32,
    },
    /// Drop all queued commands, keeping the current color.
    Reset,
}
