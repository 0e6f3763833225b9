use std::fmt;

use crate::config::Config;
use crate::model::{CommentData, ListFetchParams, NotifyData, PageData};

/// Discriminant used to subscribe to one kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ListFetch,
    ListLoad,
    ListLoaded,
    CommentInserted,
    CommentUpdated,
    CommentDeleted,
    NotifiesUpdated,
    PageLoaded,
    ConfLoaded,
    Destroy,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::ListFetch,
        EventKind::ListLoad,
        EventKind::ListLoaded,
        EventKind::CommentInserted,
        EventKind::CommentUpdated,
        EventKind::CommentDeleted,
        EventKind::NotifiesUpdated,
        EventKind::PageLoaded,
        EventKind::ConfLoaded,
        EventKind::Destroy,
    ];

    /// Wire name of the event, as views and plugins know it
    pub fn name(self) -> &'static str {
        match self {
            EventKind::ListFetch => "list-fetch",
            EventKind::ListLoad => "list-load",
            EventKind::ListLoaded => "list-loaded",
            EventKind::CommentInserted => "comment-inserted",
            EventKind::CommentUpdated => "comment-updated",
            EventKind::CommentDeleted => "comment-deleted",
            EventKind::NotifiesUpdated => "notifies-updated",
            EventKind::PageLoaded => "page-loaded",
            EventKind::ConfLoaded => "conf-loaded",
            EventKind::Destroy => "destroy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event together with its payload.
///
/// Payloads borrow from the emitter, so listeners see the state as it is at
/// emission time and must clone whatever they keep.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    ListFetch(&'a ListFetchParams),
    ListLoad(&'a [CommentData]),
    ListLoaded(&'a [CommentData]),
    CommentInserted(&'a CommentData),
    CommentUpdated(&'a CommentData),
    CommentDeleted(&'a CommentData),
    NotifiesUpdated(&'a [NotifyData]),
    PageLoaded(&'a PageData),
    ConfLoaded(&'a Config),
    Destroy,
}

impl Event<'_> {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::ListFetch(_) => EventKind::ListFetch,
            Event::ListLoad(_) => EventKind::ListLoad,
            Event::ListLoaded(_) => EventKind::ListLoaded,
            Event::CommentInserted(_) => EventKind::CommentInserted,
            Event::CommentUpdated(_) => EventKind::CommentUpdated,
            Event::CommentDeleted(_) => EventKind::CommentDeleted,
            Event::NotifiesUpdated(_) => EventKind::NotifiesUpdated,
            Event::PageLoaded(_) => EventKind::PageLoaded,
            Event::ConfLoaded(_) => EventKind::ConfLoaded,
            Event::Destroy => EventKind::Destroy,
        }
    }
}
