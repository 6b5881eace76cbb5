//! Drives a counter from a fixed-rate loop and prints it like a stats widget would render it.

use std::{
    io::{self, Write},
    sync::Arc,
    thread,
    time::Duration,
};

use anyhow::Result;
use log::info;

use countup_animation::{CounterConfig, Easing, Instant, Ticker};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::init();

    let ticker = Arc::new(Ticker::default());
    let clients = ticker.counter(
        CounterConfig::new(1250.0, Duration::from_millis(2000))
            .with_delay(Duration::from_millis(500))
            .with_easing(Easing::QuadraticOut),
    );
    let rating = ticker.counter(
        CounterConfig::new(4.9, Duration::from_millis(2000))
            .with_delay(Duration::from_millis(500))
            .with_precision(1),
    );

    // The element scrolled into view.
    info!("counters in view");
    clients.set_visible(true);
    rating.set_visible(true);

    while ticker.wants_ticks() {
        ticker.tick(Instant::now());
        print!(
            "\rhappy clients: {:>6}    rating: {:>3}",
            clients.value(),
            rating.value()
        );
        io::stdout().flush()?;
        thread::sleep(FRAME);
    }
    println!();

    info!("all counters completed");
    Ok(())
}
