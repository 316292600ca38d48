//! Inclusive range clamping for channel values and step counts.

/// Bounds `value` to `[lower, upper]` inclusively.
///
/// Unlike [`Ord::clamp`] this never panics when `lower > upper`; the upper bound wins.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    if value > upper {
        upper
    } else if value < lower {
        lower
    } else {
        value
    }
}

/// Clamps a signed channel value into `[0, write_range]`.
#[inline]
pub(crate) fn clamp_channel(value: i32, write_range: u16) -> u16 {
    clamp(value, 0, i32::from(write_range)) as u16
}
