//! Queued color transitions.

use palette::Srgb;

/// One queued color transition.
///
/// Commands are immutable once built. The per-channel coefficients are fixed at enqueue
/// time against the color that will be active when the command starts, and every
/// intermediate step is recomputed from the target rather than accumulated, so rounding
/// never builds up across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    target: Srgb<u16>,
    coefficients: [f64; 3],
    steps: u32,
    duration: u32,
}

impl Command {
    /// Builds a transition from `baseline` to `target`.
    ///
    /// `requested_steps` is clamped to the largest per-channel difference between the two
    /// colors. Returns `None` when that leaves zero steps, i.e. the colors are equal or
    /// zero steps were requested.
    pub fn transition(
        baseline: Srgb<u16>,
        target: Srgb<u16>,
        requested_steps: u32,
        duration: u32,
    ) -> Option<Self> {
        let deltas = channel_deltas(baseline, target);
        let steps = crate::clamp::clamp(requested_steps, 0, max_channel_delta(baseline, target));
        if steps == 0 {
            return None;
        }

        let per_step = |delta: i32| f64::from(delta) / f64::from(steps);

        Some(Self {
            target,
            coefficients: [per_step(deltas[0]), per_step(deltas[1]), per_step(deltas[2])],
            steps,
            duration,
        })
    }

    /// An instant jump to `target` that completes on its first poll.
    pub fn snap(target: Srgb<u16>) -> Self {
        Self {
            target,
            coefficients: [0.0; 3],
            steps: 1,
            duration: 0,
        }
    }

    /// The exact color emitted when the command completes.
    pub fn target(&self) -> Srgb<u16> {
        self.target
    }

    /// Per-channel change per step, in red, green, blue order.
    pub fn coefficients(&self) -> [f64; 3] {
        self.coefficients
    }

    /// Number of discrete steps. `1` is an immediate change held for the duration.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Total transition time in milliseconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// True when the command holds a single color rather than fading.
    pub fn is_immediate(&self) -> bool {
        self.steps == 1
    }

    /// Milliseconds after start at which step `index` becomes due.
    ///
    /// Integer division first, so the spacing is whole milliseconds.
    pub(crate) fn step_boundary(&self, index: u32) -> u64 {
        u64::from(self.duration / self.steps) * u64::from(index)
    }

    /// Channel values for step `index` (1-based).
    ///
    /// Values are not clamped here; the output stage bounds them to the write range.
    pub(crate) fn color_at_step(&self, index: u32) -> [i32; 3] {
        let remaining = f64::from(self.steps.saturating_sub(index));
        let target = [self.target.red, self.target.green, self.target.blue];
        let mut out = [0i32; 3];
        for (channel, value) in out.iter_mut().enumerate() {
            let raw = f64::from(target[channel]) - remaining * self.coefficients[channel];
            *value = libm::ceil(raw) as i32;
        }
        out
    }
}

/// Signed target-minus-baseline difference per channel.
fn channel_deltas(baseline: Srgb<u16>, target: Srgb<u16>) -> [i32; 3] {
    [
        i32::from(target.red) - i32::from(baseline.red),
        i32::from(target.green) - i32::from(baseline.green),
        i32::from(target.blue) - i32::from(baseline.blue),
    ]
}

/// Largest absolute per-channel difference between two colors.
pub fn max_channel_delta(baseline: Srgb<u16>, target: Srgb<u16>) -> u32 {
    channel_deltas(baseline, target)
        .iter()
        .map(|delta| delta.unsigned_abs())
        .max()
        .unwrap_or(0)
}
