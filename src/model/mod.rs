//! Data Model
//!
//! Plain records exchanged with the comment server and held by the
//! [`DataManager`](crate::data::DataManager).

pub mod comment;
pub mod list;
pub mod page;

pub use comment::{CommentData, CommentId};
pub use list::{ListData, ListFetchMode, ListFetchParams, ListLastFetchData};
pub use page::{NotifyData, PageData};
