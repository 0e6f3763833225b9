use anyhow::Result;
use tokio::sync::mpsc;

use super::widget::{init_count_widget, CountOptions};
use crate::context::Context;
use crate::dom::Document;
use crate::events::{Event, EventKind};

/// Runs the count widget whenever the context's configuration is loaded.
///
/// Each `conf-loaded` queues a [`CountOptions`] built from the new
/// configuration; the owner of the document drains the queue with
/// [`run_pending`](Self::run_pending) or [`run_next`](Self::run_next). The
/// queue closes once the context is destroyed.
#[derive(Debug)]
pub struct PvCountWidget {
    rx: mpsc::UnboundedReceiver<CountOptions>,
}

impl PvCountWidget {
    pub fn register(ctx: &Context) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let api = ctx.api().clone();

        ctx.events().on(EventKind::ConfLoaded, move |event| {
            let Event::ConfLoaded(conf) = event else {
                return;
            };
            let options = CountOptions {
                api: api.clone(),
                page_key: conf.page_key.clone(),
                count_el: conf.count_el.clone(),
                pv_el: conf.pv_el.clone(),
                pv_add: conf.pv_add,
            };
            if tx.send(options).is_err() {
                log::debug!("count widget dropped, ignoring conf-loaded");
            }
        });

        Self { rx }
    }

    /// Run the widget for every queued configuration. Returns how many ran.
    pub async fn run_pending<D: Document>(&mut self, dom: &mut D) -> Result<usize> {
        let mut runs = 0;
        while let Ok(options) = self.rx.try_recv() {
            init_count_widget(&options, dom).await?;
            runs += 1;
        }
        Ok(runs)
    }

    /// Wait for the next configuration and run the widget for it.
    ///
    /// Returns `false` once the context is gone and nothing is queued.
    pub async fn run_next<D: Document>(&mut self, dom: &mut D) -> Result<bool> {
        match self.rx.recv().await {
            Some(options) => {
                init_count_widget(&options, dom).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
