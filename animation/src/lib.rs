mod config;
mod counter;
mod easing;
mod ticker;
mod time;

pub use config::*;
pub use counter::*;
pub use easing::*;
pub use ticker::*;
pub use time::*;
