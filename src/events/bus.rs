use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::event::{Event, EventKind};

type Handler = Arc<dyn Fn(&Event<'_>) + Send + Sync>;

/// Handle returned by [`EventManager::on`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    kind: EventKind,
    once: bool,
    handler: Handler,
}

/// Publish/subscribe dispatcher.
///
/// Delivery is synchronous and follows registration order. Each trigger
/// works on a snapshot of the listener list, so handlers may subscribe or
/// unsubscribe (even themselves) while an event is being delivered; such
/// changes take effect from the next trigger.
pub struct EventManager {
    listeners: Mutex<Vec<Listener>>,
    next_id: AtomicU64,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("listeners", &self.lock().len())
            .finish()
    }
}

impl EventManager {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Subscribe to every future event of `kind`
    pub fn on<F>(&self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&Event<'_>) + Send + Sync + 'static,
    {
        self.register(kind, false, Arc::new(handler))
    }

    /// Subscribe to the next event of `kind` only
    pub fn once<F>(&self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&Event<'_>) + Send + Sync + 'static,
    {
        self.register(kind, true, Arc::new(handler))
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        listeners.len() != before
    }

    /// Deliver `event` to its listeners, in registration order
    pub fn trigger(&self, event: &Event<'_>) {
        let kind = event.kind();
        let handlers: Vec<Handler> = {
            let mut listeners = self.lock();
            let handlers = listeners
                .iter()
                .filter(|l| l.kind == kind)
                .map(|l| Arc::clone(&l.handler))
                .collect();
            listeners.retain(|l| !(l.once && l.kind == kind));
            handlers
        };

        log::trace!("event={} listeners={}", kind, handlers.len());

        for handler in handlers {
            handler(event);
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.lock().iter().filter(|l| l.kind == kind).count()
    }

    /// Drop every listener
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn register(&self, kind: EventKind, once: bool, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push(Listener {
            id,
            kind,
            once,
            handler,
        });
        id
    }

    // listeners never run under the lock, so a poisoned list is still consistent
    fn lock(&self) -> MutexGuard<'_, Vec<Listener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
