pub mod event;
pub mod queue;
pub mod time;

pub use event::{parse, Error, Event};
pub use queue::{EventQueue, Triggered};
pub use time::Ticks;
