//! Event Bus
//!
//! Ordered, synchronous publish/subscribe shared by the data layer, views
//! and plugins.

pub mod bus;
pub mod event;

pub use bus::{EventManager, ListenerId};
pub use event::{Event, EventKind};
