use std::sync::{self, Arc};

use parking_lot::Mutex;

use crate::{Counter, CounterConfig, Instant};

/// The frame clock fan-out.
///
/// Hosts feed it one [`tick`](Ticker::tick) per presented frame; it forwards the tick to every
/// registered receiver. Receivers are held weakly: dropping the owning handle cancels its pending
/// ticks, and a receiver that returns [`TickResponse::Stop`] is unregistered.
///
/// This makes cancellation synchronous and idempotent. Once the last strong reference to a
/// receiver is gone, no further tick can reach it.
#[derive(Debug, Default)]
pub struct Ticker {
    receivers: Mutex<Vec<sync::Weak<dyn ReceivesTicks>>>,
}

impl Ticker {
    /// Create a counter run bound to this frame clock.
    ///
    /// The run stays idle until its visibility signal turns true.
    pub fn counter(self: &Arc<Self>, config: CounterConfig) -> Counter {
        Counter::new(self.clone(), config)
    }

    /// Advance the clock by one frame.
    ///
    /// Receivers that stop, and receivers whose owner was dropped, are removed.
    pub fn tick(&self, now: Instant) {
        self.receivers.lock().retain_mut(|registration| {
            if let Some(registration) = registration.upgrade() {
                match registration.tick(now) {
                    TickResponse::Stop => false,
                    TickResponse::Continue => true,
                }
            } else {
                false
            }
        });
    }

    /// `true` while at least one receiver still needs frames.
    ///
    /// Hosts use this to pause their frame loop when everything settled.
    pub fn wants_ticks(&self) -> bool {
        !self.receivers.lock().is_empty()
    }

    pub(crate) fn register(&self, receiver: sync::Weak<dyn ReceivesTicks>) {
        self.receivers.lock().push(receiver);
    }
}

#[derive(Debug)]
pub enum TickResponse {
    Continue,
    Stop,
}

pub trait ReceivesTicks: Send + Sync {
    #[must_use]
    fn tick(&self, now: Instant) -> TickResponse;
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    struct CountingReceiver {
        ticks: AtomicUsize,
        stop_after: usize,
    }

    impl ReceivesTicks for CountingReceiver {
        fn tick(&self, _now: Instant) -> TickResponse {
            if self.ticks.fetch_add(1, Ordering::SeqCst) + 1 >= self.stop_after {
                TickResponse::Stop
            } else {
                TickResponse::Continue
            }
        }
    }

    #[test]
    fn stopping_receiver_is_unregistered() {
        let ticker = Ticker::default();
        let receiver = Arc::new(CountingReceiver {
            ticks: AtomicUsize::new(0),
            stop_after: 2,
        });
        let weak: sync::Weak<dyn ReceivesTicks> = Arc::<CountingReceiver>::downgrade(&receiver);
        ticker.register(weak);
        assert!(ticker.wants_ticks());

        let now = Instant::now();
        ticker.tick(now);
        assert!(ticker.wants_ticks());
        ticker.tick(now);
        assert!(!ticker.wants_ticks());

        // Further ticks don't reach it.
        ticker.tick(now);
        assert_eq!(receiver.ticks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let ticker = Ticker::default();
        let receiver = Arc::new(CountingReceiver {
            ticks: AtomicUsize::new(0),
            stop_after: usize::MAX,
        });
        let weak: sync::Weak<dyn ReceivesTicks> = Arc::<CountingReceiver>::downgrade(&receiver);
        ticker.register(weak);
        drop(receiver);

        assert!(ticker.wants_ticks());
        ticker.tick(Instant::now());
        assert!(!ticker.wants_ticks());
    }
}
