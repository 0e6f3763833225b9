//! Comment State
//!
//! Client-side state for an embeddable comment system.
//!
//! This library provides:
//! - An ordered, synchronous event bus
//! - The comment/notification/page data manager
//! - The page-view and comment count widget
//! - A shared context with defined creation and teardown

pub mod api;
pub mod app;
pub mod config;
pub mod context;
pub mod data;
pub mod dom;
pub mod events;
pub mod model;
pub mod stat;

// Re-exports for clean public API
pub use api::{CountData, HttpApi, PageApi, StatQuery};
pub use config::Config;
pub use context::Context;
pub use data::{DataError, DataManager};
pub use dom::{Document, Element, MemoryDocument};
pub use events::{Event, EventKind, EventManager};
pub use model::{CommentData, NotifyData, PageData};
pub use stat::{init_count_widget, CountOptions, PvCountWidget};
