//! Behaviour of the data manager as seen by views subscribed to the bus
use std::sync::{Arc, Mutex};

use comment_state::data::{DataError, DataManager};
use comment_state::events::{Event, EventKind, EventManager};
use comment_state::model::{CommentData, ListFetchParams, NotifyData};

/// Records `(event name, list length or comment id)` for every event
fn setup() -> (DataManager, Arc<Mutex<Vec<(String, u64)>>>) {
    let events = Arc::new(EventManager::new());
    let log = Arc::new(Mutex::new(Vec::new()));

    for kind in EventKind::ALL {
        let log = Arc::clone(&log);
        events.on(kind, move |event| {
            let detail = match event {
                Event::ListLoad(list) | Event::ListLoaded(list) => list.len() as u64,
                Event::CommentInserted(c) | Event::CommentUpdated(c) | Event::CommentDeleted(c) => {
                    c.id
                }
                Event::NotifiesUpdated(list) => list.len() as u64,
                Event::ListFetch(params) => params.offset.unwrap_or_default(),
                _ => 0,
            };
            log.lock()
                .unwrap()
                .push((event.kind().name().to_string(), detail));
        });
    }

    (DataManager::new(events), log)
}

fn names(log: &Arc<Mutex<Vec<(String, u64)>>>) -> Vec<String> {
    log.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
}

#[test]
fn test_load_comments_on_empty_list_keeps_order() {
    let (mut data, log) = setup();
    let a = CommentData::new(1, "a");
    let b = CommentData::new(2, "b");

    data.load_comments(vec![a.clone(), b.clone()]);

    assert_eq!(data.comments(), &[a, b]);
    assert_eq!(
        *log.lock().unwrap(),
        vec![("list-load".to_string(), 2), ("list-loaded".to_string(), 2)]
    );
}

#[test]
fn test_load_comments_appends_without_dedup() {
    let (mut data, _log) = setup();
    data.load_comments(vec![CommentData::new(1, "a")]);
    data.load_comments(vec![CommentData::new(2, "b"), CommentData::new(3, "c")]);

    let ids: Vec<u64> = data.comments().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_insert_then_find() {
    let (mut data, log) = setup();
    data.load_comments(vec![CommentData::new(1, "a")]);
    log.lock().unwrap().clear();

    let c = CommentData::new(5, "new");
    data.insert_comment(c.clone());

    assert_eq!(data.find_comment(5), Some(&c));
    assert_eq!(data.comments().len(), 2);
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            ("comment-inserted".to_string(), 5),
            ("list-loaded".to_string(), 2)
        ]
    );
}

#[test]
fn test_update_replaces_only_matching_entry() {
    let (mut data, log) = setup();
    data.load_comments(vec![
        CommentData::new(1, "a"),
        CommentData::new(2, "b"),
        CommentData::new(3, "c"),
    ]);
    log.lock().unwrap().clear();

    let mut edited = CommentData::new(2, "b edited");
    edited.is_pinned = true;
    data.update_comment(edited.clone());

    assert_eq!(data.comments()[0], CommentData::new(1, "a"));
    assert_eq!(data.comments()[1], edited);
    assert_eq!(data.comments()[2], CommentData::new(3, "c"));
    assert_eq!(names(&log), vec!["comment-updated", "list-loaded"]);
}

#[test]
fn test_delete_unknown_id_fails_and_keeps_list() {
    let (mut data, log) = setup();
    data.load_comments(vec![CommentData::new(1, "a"), CommentData::new(2, "b")]);
    let before = data.comments().to_vec();
    log.lock().unwrap().clear();

    let err = data.delete_comment(42).unwrap_err();

    assert_eq!(err, DataError::CommentNotFound(42));
    assert_eq!(err.to_string(), "comment 42 not found");
    assert_eq!(data.comments(), before.as_slice());
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_delete_emits_deleted_then_loaded() {
    let (mut data, log) = setup();
    data.load_comments(vec![CommentData::new(1, "a"), CommentData::new(2, "b")]);
    log.lock().unwrap().clear();

    data.delete_comment(1).expect("delete existing comment");

    assert!(data.find_comment(1).is_none());
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            ("comment-deleted".to_string(), 1),
            ("list-loaded".to_string(), 1)
        ]
    );
}

#[test]
fn test_clear_comments() {
    let (mut data, log) = setup();
    data.load_comments(vec![CommentData::new(1, "a")]);
    log.lock().unwrap().clear();

    data.clear_comments();

    assert!(data.comments().is_empty());
    assert_eq!(*log.lock().unwrap(), vec![("list-loaded".to_string(), 0)]);
}

#[test]
fn test_fetch_comments_only_emits() {
    let (data, log) = setup();

    data.fetch_comments(&ListFetchParams {
        offset: Some(20),
        ..Default::default()
    });

    assert!(data.comments().is_empty());
    assert_eq!(*log.lock().unwrap(), vec![("list-fetch".to_string(), 20)]);
}

#[test]
fn test_update_notifies_replaces_list() {
    let (mut data, log) = setup();
    data.update_notifies(vec![NotifyData::default(), NotifyData::default()]);
    data.update_notifies(vec![NotifyData {
        comment_id: 9,
        ..Default::default()
    }]);

    assert_eq!(data.notifies().len(), 1);
    assert_eq!(data.notifies()[0].comment_id, 9);
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            ("notifies-updated".to_string(), 2),
            ("notifies-updated".to_string(), 1)
        ]
    );
}

#[test]
fn test_listener_sees_state_after_mutation() {
    let events = Arc::new(EventManager::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    {
        let seen = Arc::clone(&seen);
        events.on(EventKind::ListLoaded, move |event| {
            if let Event::ListLoaded(list) = event {
                seen.lock()
                    .unwrap()
                    .push(list.iter().map(|c| c.id).collect::<Vec<_>>());
            }
        });
    }
    let mut data = DataManager::new(events);

    data.insert_comment(CommentData::new(1, "a"));
    data.insert_comment(CommentData::new(2, "b"));

    assert_eq!(*seen.lock().unwrap(), vec![vec![1], vec![1, 2]]);
}
