//! [`PwmOutput`] implementation for `embedded-hal` PWM channels.

use crate::output::PwmOutput;
use embedded_hal::pwm::SetDutyCycle;

/// Output line of an RGB LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// RGB LED driven by three `embedded-hal` PWM channels.
///
/// Fader values in `[0, range]` are mapped onto each channel's own duty-cycle scale, so
/// the write range does not have to match the timer resolution.
pub struct PwmRgb<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    range: u16,
    common_anode: bool,
}

impl<R, G, B> PwmRgb<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new RGB LED output
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        let range = red.max_duty_cycle().max(1);

        Self {
            red,
            green,
            blue,
            range,
            common_anode,
        }
    }

    /// Returns the three PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn level(&self, value: u16) -> u16 {
        let value = value.min(self.range);
        if self.common_anode {
            self.range - value
        } else {
            value
        }
    }
}

impl<R, G, B> PwmOutput for PwmRgb<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    type Channel = Channel;

    fn set_range(&mut self, range: u16) {
        self.range = range.max(1);
    }

    fn write(&mut self, channel: Channel, value: u16) {
        let level = self.level(value);
        let range = self.range;
        match channel {
            Channel::Red => {
                let _ = self.red.set_duty_cycle_fraction(level, range);
            }
            Channel::Green => {
                let _ = self.green.set_duty_cycle_fraction(level, range);
            }
            Channel::Blue => {
                let _ = self.blue.set_duty_cycle_fraction(level, range);
            }
        }
    }
}
