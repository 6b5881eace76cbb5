use std::{
    fmt,
    sync::{Arc, Weak},
};

use log::debug;
use parking_lot::Mutex;

use crate::{CounterConfig, Instant, ReceivesTicks, TickResponse, Ticker};

/// A counter value animating from 0 to a target, triggered once by a visibility signal.
///
/// The counter stays idle until [`set_visible`](Counter::set_visible) first observes `true`. From
/// then on it receives frame ticks from its [`Ticker`], waits out the configured delay, and
/// publishes an interpolated value every tick until the target is reached. A completed run is
/// inert: later visibility changes never restart it.
///
/// The ticker only holds the run weakly. Dropping this handle cancels any pending tick, so a run
/// can never outlive the element that owns it.
pub struct Counter {
    ticker: Arc<Ticker>,
    run: Arc<Run>,
}

impl Counter {
    pub(crate) fn new(ticker: Arc<Ticker>, config: CounterConfig) -> Self {
        Self {
            ticker,
            run: Arc::new(Run {
                config,
                inner: Mutex::new(RunInner {
                    state: RunState::Idle,
                    value: 0.0,
                }),
                observer: Mutex::new(None),
            }),
        }
    }

    /// Forward the level-triggered visibility signal.
    ///
    /// The first `true` while idle schedules the run with the ticker, exactly once. Everything
    /// else is a no-op: `false`, repeated `true` while already scheduled, and any value after
    /// completion.
    pub fn set_visible(&self, visible: bool) {
        if !visible {
            return;
        }

        {
            let mut inner = self.run.inner.lock();
            if !matches!(inner.state, RunState::Idle) {
                return;
            }
            inner.state = RunState::Scheduled { started_at: None };
        }

        debug!(
            "counter to {} became eligible, scheduling ticks",
            self.run.config.target
        );
        let receiver: Weak<dyn ReceivesTicks> = Arc::<Run>::downgrade(&self.run);
        self.ticker.register(receiver);
    }

    /// The current value. Starts at 0, ends at exactly the configured target.
    pub fn value(&self) -> f64 {
        self.run.inner.lock().value
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.run.inner.lock().state, RunState::Completed)
    }

    /// Install a callback invoked with every published value.
    ///
    /// The final invocation carries the exact target. Delay ticks publish nothing.
    pub fn set_observer(&self, observer: impl Fn(f64) + Send + Sync + 'static) {
        *self.run.observer.lock() = Some(Box::new(observer));
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.run.inner.lock();
        f.debug_struct("Counter")
            .field("config", &self.run.config)
            .field("state", &inner.state)
            .field("value", &inner.value)
            .finish()
    }
}

/// The run state shared between the handle and the ticker.
struct Run {
    config: CounterConfig,
    inner: Mutex<RunInner>,
    observer: Mutex<Option<Box<dyn Fn(f64) + Send + Sync>>>,
}

#[derive(Debug)]
struct RunInner {
    state: RunState,
    /// The only externally observable output.
    value: f64,
}

#[derive(Debug)]
enum RunState {
    /// Waiting for the visibility signal.
    Idle,
    /// Registered with the ticker. `started_at` is recorded on the first tick.
    Scheduled { started_at: Option<Instant> },
    /// Reached the target. No transition leaves this state.
    Completed,
}

impl Run {
    fn notify(&self, value: f64) {
        if let Some(observer) = &*self.observer.lock() {
            observer(value);
        }
    }
}

impl ReceivesTicks for Run {
    fn tick(&self, now: Instant) -> TickResponse {
        let (published, response) = {
            let mut inner = self.inner.lock();
            let started_at = match inner.state {
                RunState::Idle => return TickResponse::Continue,
                RunState::Completed => return TickResponse::Stop,
                RunState::Scheduled { ref mut started_at } => {
                    *started_at.get_or_insert(now + self.config.delay)
                }
            };

            if self.config.target == 0.0 {
                inner.complete(&self.config);
                (0.0, TickResponse::Stop)
            } else if now < started_at {
                // Still in the delay window. The value stays 0, nothing is published.
                return TickResponse::Continue;
            } else {
                let elapsed = now - started_at;
                let t = elapsed.as_secs_f64() / self.config.duration.as_secs_f64();
                // `t` may be NaN if duration is zero.
                if t >= 1.0 || !t.is_finite() {
                    inner.complete(&self.config);
                    (self.config.target, TickResponse::Stop)
                } else {
                    let raw = self.config.target * self.config.easing.apply(t);
                    let value = quantize(raw, self.config.precision);
                    inner.value = value;
                    (value, TickResponse::Continue)
                }
            }
        };

        self.notify(published);
        response
    }
}

impl RunInner {
    fn complete(&mut self, config: &CounterConfig) {
        // Publish the exact target, overriding any rounding error.
        self.value = config.target;
        self.state = RunState::Completed;
        debug!("counter reached {} and completed", config.target);
    }
}

/// The precision policy.
///
/// With a precision of 0 the raw value is floored, never rounded, so the counter does not show a
/// step the animation hasn't reached yet. With more digits the raw value is rounded, which may
/// transiently run slightly ahead of the true interpolated value but converges smoothly.
fn quantize(raw: f64, precision: u32) -> f64 {
    if precision == 0 {
        return raw.floor();
    }
    let scale = 10f64.powi(precision as i32);
    (raw * scale).round() / scale
}
