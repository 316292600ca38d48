//! Shared test infrastructure for rgb-fader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::delay::DelayNs;
use palette::Srgb;
use rgb_fader::{PwmOutput, RgbFader, TimeSource};

// ============================================================================
// Mock PWM Output
// ============================================================================

pub const RED_PIN: u8 = 9;
pub const GREEN_PIN: u8 = 10;
pub const BLUE_PIN: u8 = 11;

/// Mock PWM output that records every write
pub struct MockOutput {
    range: Option<u16>,
    writes: heapless::Vec<(u8, u16), 8192>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            range: None,
            writes: heapless::Vec::new(),
        }
    }

    pub fn range(&self) -> Option<u16> {
        self.range
    }

    pub fn writes(&self) -> &[(u8, u16)] {
        &self.writes
    }

    /// Last value written to `pin`, if any
    pub fn level(&self, pin: u8) -> Option<u16> {
        self.writes
            .iter()
            .rev()
            .find(|(written, _)| *written == pin)
            .map(|(_, value)| *value)
    }

    /// Color made of the last values written to the three pins
    pub fn color(&self) -> Srgb<u16> {
        Srgb::new(
            self.level(RED_PIN).unwrap_or(0),
            self.level(GREEN_PIN).unwrap_or(0),
            self.level(BLUE_PIN).unwrap_or(0),
        )
    }
}

impl PwmOutput for MockOutput {
    type Channel = u8;

    fn set_range(&mut self, range: u16) {
        self.range = Some(range);
    }

    fn write(&mut self, channel: u8, value: u16) {
        let _ = self.writes.push((channel, value));
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Millisecond clock that only moves when told to
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            now: Cell::new(millis),
        }
    }

    /// Advance time by `millis`, wrapping like a hardware counter
    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get().wrapping_add(millis));
    }

    pub fn set(&self, millis: u32) {
        self.now.set(millis);
    }
}

impl TimeSource<u32> for MockClock {
    fn now(&self) -> u32 {
        self.now.get()
    }
}

/// Delay that advances a [`MockClock`] instead of sleeping
pub struct MockDelay<'a> {
    clock: &'a MockClock,
    pub slept: u32,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self { clock, slept: 0 }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns.div_ceil(1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(ms);
        self.slept += ms;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Fader on the mock output with an 8-bit write range
pub fn new_fader<const N: usize>() -> RgbFader<u32, MockOutput, N> {
    RgbFader::new(MockOutput::new(), RED_PIN, GREEN_PIN, BLUE_PIN, 255)
}

/// Polls once per millisecond from `from` to `to` inclusive
pub fn poll_range<const N: usize>(fader: &mut RgbFader<u32, MockOutput, N>, from: u32, to: u32) {
    for now in from..=to {
        fader.poll(now);
    }
}
