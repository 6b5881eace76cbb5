//! The time source driving all runs.
//!
//! On wasm, `std::time::Instant` panics, so the frame clock uses `web_time` there.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

pub use std::time::Duration;
