//! Output stage between the fader and the PWM hardware.
//!
//! Defines the [`PwmOutput`] trait for hardware abstraction and [`ColorSink`], which
//! clamps every color to the configured write range, remembers the last color written
//! and forwards each channel to the output.

use crate::clamp::clamp_channel;
use palette::Srgb;

/// Trait for abstracting pulse-width outputs.
///
/// Implement this for your PWM peripheral. `Channel` is whatever handle the hardware
/// uses to address an output line (a pin number, a channel enum, ...). The fader passes
/// the handles through untouched.
pub trait PwmOutput {
    /// Hardware handle of a single output line.
    type Channel: Copy;

    /// Configures the maximum intensity value. Called once, before any write.
    fn set_range(&mut self, range: u16);

    /// Drives `channel` at `value`, where `value` is in `[0, range]`.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn write(&mut self, channel: Self::Channel, value: u16);
}

/// Clamping, state-recording adapter over a [`PwmOutput`].
pub struct ColorSink<P: PwmOutput> {
    output: P,
    channels: [P::Channel; 3],
    write_range: u16,
    active_color: Srgb<u16>,
}

impl<P: PwmOutput> ColorSink<P> {
    /// Wraps `output`, applies the write range and turns the LED off.
    ///
    /// A write range of 0 is raised to 1.
    pub fn new(
        mut output: P,
        red: P::Channel,
        green: P::Channel,
        blue: P::Channel,
        write_range: u16,
    ) -> Self {
        let write_range = write_range.max(1);
        output.set_range(write_range);

        let mut sink = Self {
            output,
            channels: [red, green, blue],
            write_range,
            active_color: Srgb::new(0, 0, 0),
        };
        sink.set_color(0, 0, 0);
        sink
    }

    /// Clamps the channels to `[0, write_range]`, records and writes them.
    pub fn set_color(&mut self, red: i32, green: i32, blue: i32) {
        let color = self.clamp(red, green, blue);
        self.apply(color);
    }

    /// Like [`set_color`](Self::set_color) but skips the hardware when nothing changes.
    ///
    /// Returns true if the output was written.
    pub fn update(&mut self, red: i32, green: i32, blue: i32) -> bool {
        let color = self.clamp(red, green, blue);
        if color == self.active_color {
            return false;
        }
        self.apply(color);
        true
    }

    /// Last color written to the output.
    pub fn active_color(&self) -> Srgb<u16> {
        self.active_color
    }

    /// Maximum channel intensity.
    pub fn write_range(&self) -> u16 {
        self.write_range
    }

    /// Shared access to the wrapped output.
    pub fn output(&self) -> &P {
        &self.output
    }

    /// Consumes the sink and returns the wrapped output.
    pub fn release(self) -> P {
        self.output
    }

    fn clamp(&self, red: i32, green: i32, blue: i32) -> Srgb<u16> {
        Srgb::new(
            clamp_channel(red, self.write_range),
            clamp_channel(green, self.write_range),
            clamp_channel(blue, self.write_range),
        )
    }

    // `color` must already be within the write range.
    fn apply(&mut self, color: Srgb<u16>) {
        self.active_color = color;

        #[cfg(feature = "defmt")]
        defmt::trace!("set color r={} g={} b={}", color.red, color.green, color.blue);

        let [r, g, b] = self.channels;
        self.output.write(r, color.red);
        self.output.write(g, color.green);
        self.output.write(b, color.blue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingOutput {
        range: u16,
        last: [u16; 3],
        writes: usize,
    }

    impl PwmOutput for CountingOutput {
        type Channel = usize;

        fn set_range(&mut self, range: u16) {
            self.range = range;
        }

        fn write(&mut self, channel: usize, value: u16) {
            assert!(value <= self.range);
            self.last[channel] = value;
            self.writes += 1;
        }
    }

    fn sink(write_range: u16) -> ColorSink<CountingOutput> {
        let output = CountingOutput {
            range: 0,
            last: [0; 3],
            writes: 0,
        };
        ColorSink::new(output, 0, 1, 2, write_range)
    }

    #[test]
    fn update_clamps_out_of_range_channels() {
        let mut sink = sink(100);
        assert!(sink.update(300, -5, 50));
        assert_eq!(sink.active_color(), Srgb::new(100, 0, 50));
        assert_eq!(sink.output().last, [100, 0, 50]);
    }

    #[test]
    fn update_skips_output_when_clamped_color_is_unchanged() {
        let mut sink = sink(100);
        sink.set_color(100, 0, 0);
        let writes = sink.output().writes;

        // Different raw values that clamp to the color already shown.
        assert!(!sink.update(250, -1, 0));
        assert_eq!(sink.output().writes, writes);

        assert!(sink.update(99, 0, 0));
        assert_eq!(sink.output().writes, writes + 3);
    }

    #[test]
    fn construction_writes_black_and_raises_zero_range() {
        let sink = sink(0);
        assert_eq!(sink.write_range(), 1);
        assert_eq!(sink.output().range, 1);
        assert_eq!(sink.output().writes, 3);
        assert_eq!(sink.active_color(), Srgb::new(0, 0, 0));
    }
}
