use std::sync::Arc;

use thiserror::Error;

use crate::events::{Event, EventManager};
use crate::model::{CommentData, CommentId, ListFetchParams, ListLastFetchData, NotifyData, PageData};

/// Errors raised by [`DataManager`] mutators
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("comment {0} not found")]
    CommentNotFound(CommentId),
}

/// Holds client-side state and emits an event for every change.
///
/// Mutators update local state first and then trigger their events
/// synchronously, before returning. `list-loaded` always comes last.
#[derive(Debug)]
pub struct DataManager {
    events: Arc<EventManager>,
    loading: bool,
    list_last_fetch: Option<ListLastFetchData>,
    /// Flat and unordered
    comments: Vec<CommentData>,
    notifies: Vec<NotifyData>,
    page: Option<PageData>,
}

impl DataManager {
    pub fn new(events: Arc<EventManager>) -> Self {
        Self {
            events,
            loading: false,
            list_last_fetch: None,
            comments: Vec::new(),
            notifies: Vec::new(),
            page: None,
        }
    }

    pub fn events(&self) -> &Arc<EventManager> {
        &self.events
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn list_last_fetch(&self) -> Option<&ListLastFetchData> {
        self.list_last_fetch.as_ref()
    }

    pub fn set_list_last_fetch(&mut self, data: ListLastFetchData) {
        self.list_last_fetch = Some(data);
    }

    // -------------------------------------------------------------------
    //  Comments
    // -------------------------------------------------------------------

    pub fn comments(&self) -> &[CommentData] {
        &self.comments
    }

    pub fn find_comment(&self, id: CommentId) -> Option<&CommentData> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Ask whoever owns the list fetcher to load comments. No I/O happens here.
    pub fn fetch_comments(&self, params: &ListFetchParams) {
        self.events.trigger(&Event::ListFetch(params));
    }

    pub fn clear_comments(&mut self) {
        self.comments.clear();
        self.events.trigger(&Event::ListLoaded(&self.comments));
    }

    /// Append a batch, keeping its order. No deduplication is done.
    pub fn load_comments(&mut self, batch: Vec<CommentData>) {
        self.events.trigger(&Event::ListLoad(&batch));

        log::debug!(
            "loading {} comments onto {} held",
            batch.len(),
            self.comments.len()
        );
        self.comments.extend(batch);

        self.events.trigger(&Event::ListLoaded(&self.comments));
    }

    pub fn insert_comment(&mut self, comment: CommentData) {
        if self.find_comment(comment.id).is_some() {
            log::warn!("inserting comment {} which is already held", comment.id);
        }
        self.comments.push(comment);

        if let Some(inserted) = self.comments.last() {
            self.events.trigger(&Event::CommentInserted(inserted));
        }
        self.events.trigger(&Event::ListLoaded(&self.comments));
    }

    /// Replace every held comment carrying `comment.id`
    pub fn update_comment(&mut self, comment: CommentData) {
        for held in self.comments.iter_mut().filter(|c| c.id == comment.id) {
            *held = comment.clone();
        }

        self.events.trigger(&Event::CommentUpdated(&comment));
        self.events.trigger(&Event::ListLoaded(&self.comments));
    }

    /// Remove a comment and hand it back.
    ///
    /// Fails without touching the list or emitting anything when no comment
    /// has that id.
    pub fn delete_comment(&mut self, id: CommentId) -> Result<CommentData, DataError> {
        let position = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or(DataError::CommentNotFound(id))?;
        let removed = self.comments.remove(position);
        self.comments.retain(|c| c.id != id);

        self.events.trigger(&Event::CommentDeleted(&removed));
        self.events.trigger(&Event::ListLoaded(&self.comments));

        Ok(removed)
    }

    // -------------------------------------------------------------------
    //  Notifies
    // -------------------------------------------------------------------

    pub fn notifies(&self) -> &[NotifyData] {
        &self.notifies
    }

    pub fn update_notifies(&mut self, notifies: Vec<NotifyData>) {
        self.notifies = notifies;
        self.events.trigger(&Event::NotifiesUpdated(&self.notifies));
    }

    // -------------------------------------------------------------------
    //  Page
    // -------------------------------------------------------------------

    pub fn page(&self) -> Option<&PageData> {
        self.page.as_ref()
    }

    pub fn update_page(&mut self, page: PageData) {
        let page = self.page.insert(page);
        self.events.trigger(&Event::PageLoaded(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use std::sync::Mutex;

    fn manager_with_log() -> (DataManager, Arc<Mutex<Vec<EventKind>>>) {
        let events = Arc::new(EventManager::new());
        let log = Arc::new(Mutex::new(Vec::new()));
        for kind in EventKind::ALL {
            let log = Arc::clone(&log);
            events.on(kind, move |event| log.lock().unwrap().push(event.kind()));
        }
        (DataManager::new(events), log)
    }

    #[test]
    fn plain_fields_do_not_emit() {
        let (mut data, log) = manager_with_log();

        data.set_loading(true);
        data.set_list_last_fetch(ListLastFetchData::default());

        assert!(data.loading());
        assert!(data.list_last_fetch().is_some());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_missing_comment_emits_nothing() {
        let (mut data, log) = manager_with_log();
        data.load_comments(vec![CommentData::new(1, "a")]);
        log.lock().unwrap().clear();

        assert_eq!(data.delete_comment(9), Err(DataError::CommentNotFound(9)));
        assert_eq!(data.comments().len(), 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_returns_removed_comment() {
        let (mut data, log) = manager_with_log();
        data.load_comments(vec![CommentData::new(1, "a"), CommentData::new(2, "b")]);
        log.lock().unwrap().clear();

        let removed = data.delete_comment(1).expect("delete");

        assert_eq!(removed.content, "a");
        assert_eq!(data.comments(), &[CommentData::new(2, "b")]);
        assert_eq!(
            *log.lock().unwrap(),
            vec![EventKind::CommentDeleted, EventKind::ListLoaded]
        );
    }

    #[test]
    fn update_page_replaces_whole_value() {
        let (mut data, log) = manager_with_log();
        data.update_page(PageData {
            key: "/a".into(),
            title: "A".into(),
            ..Default::default()
        });
        data.update_page(PageData {
            key: "/b".into(),
            ..Default::default()
        });

        let page = data.page().expect("page");
        assert_eq!(page.key, "/b");
        assert!(page.title.is_empty());
        assert_eq!(
            *log.lock().unwrap(),
            vec![EventKind::PageLoaded, EventKind::PageLoaded]
        );
    }
}
