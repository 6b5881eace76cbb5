use crate::{Duration, Easing};

/// The fixed parameters of one counter run.
///
/// These are caller contracts, not validated inputs. A zero `duration` jumps to the target on the
/// first eligible tick, negative targets are not modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterConfig {
    /// The final value the counter reaches.
    pub target: f64,
    /// The wall-clock span over which the value interpolates.
    pub duration: Duration,
    /// How long to wait after becoming eligible before interpolation starts.
    pub delay: Duration,
    /// Decimal digits preserved in intermediate values. With 0, intermediate values are floored,
    /// never rounded, so the counter never shows a value it hasn't earned yet.
    pub precision: u32,
    /// How progress is shaped before it scales the target.
    pub easing: Easing,
}

impl CounterConfig {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            delay: Duration::ZERO,
            precision: 0,
            easing: Easing::default(),
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    pub fn with_precision(self, precision: u32) -> Self {
        Self { precision, ..self }
    }

    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }
}
