//! Data Layer
//!
//! In-memory comment, notification and page state. Every mutation is
//! re-broadcast on the event bus so views can re-render.

pub mod manager;

pub use manager::{DataError, DataManager};
