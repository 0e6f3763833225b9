//! Widget Context
//!
//! The one object views and plugins receive: configuration, event bus,
//! data manager and API client, created together and torn down together.

use std::sync::Arc;

use crate::api::PageApi;
use crate::config::Config;
use crate::data::DataManager;
use crate::events::{Event, EventKind, EventManager, ListenerId};

pub struct Context {
    conf: Config,
    events: Arc<EventManager>,
    data: DataManager,
    api: Arc<dyn PageApi>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("conf", &self.conf)
            .field("events", &self.events)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Build a context. No event fires until [`update_conf`](Self::update_conf).
    pub fn new(conf: Config, api: Arc<dyn PageApi>) -> Self {
        let events = Arc::new(EventManager::new());
        let data = DataManager::new(Arc::clone(&events));
        log::info!("context created for page {:?}", conf.page_key);

        Self {
            conf,
            events,
            data,
            api,
        }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }

    /// Replace the configuration and announce it with `conf-loaded`
    pub fn update_conf(&mut self, conf: Config) {
        self.conf = conf;
        self.events.trigger(&Event::ConfLoaded(&self.conf));
    }

    pub fn events(&self) -> &Arc<EventManager> {
        &self.events
    }

    pub fn on<F>(&self, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&Event<'_>) + Send + Sync + 'static,
    {
        self.events.on(kind, handler)
    }

    pub fn off(&self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    pub fn data(&self) -> &DataManager {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut DataManager {
        &mut self.data
    }

    pub fn api(&self) -> &Arc<dyn PageApi> {
        &self.api
    }

    /// Emit `destroy`, then drop every listener along with the held state
    pub fn destroy(self) {
        self.events.trigger(&Event::Destroy);
        self.events.clear();
        log::info!("context destroyed for page {:?}", self.conf.page_key);
    }
}
