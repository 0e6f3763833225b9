//! Stat Widget
//!
//! Fills page-view and comment counters found in the document.

pub mod plugin;
pub mod widget;

pub use plugin::PvCountWidget;
pub use widget::{
    apply_count_data, collect_page_keys, format_count, init_count_widget, refresh_stat_count,
    CountOptions, RefreshArgs,
};
