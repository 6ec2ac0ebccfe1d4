use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::catalog::CatalogSource;
use crate::controller::{FetchCompletion, FetchRequest, TopListPlan, load_top_list};
use crate::event::DomainEvent;

/// Runs catalog requests off the loop and posts their completions back.
///
/// Nothing is cancelled when a newer request is issued; completions arrive
/// in whatever order the network settles them.
pub(crate) struct FetchRuntime {
    source: Arc<dyn CatalogSource>,
    tx: UnboundedSender<DomainEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl FetchRuntime {
    pub(crate) fn new(source: Arc<dyn CatalogSource>, tx: UnboundedSender<DomainEvent>) -> Self {
        Self {
            source,
            tx,
            tasks: Vec::new(),
        }
    }

    pub(crate) fn spawn_list(&mut self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.track(tokio::spawn(async move {
            let result = source.fetch(&request.query).await;
            let _ = tx.send(DomainEvent::FetchComplete(FetchCompletion { request, result }));
        }));
    }

    pub(crate) fn spawn_top_list(&mut self, plan: TopListPlan) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.track(tokio::spawn(async move {
            let result = load_top_list(source.as_ref(), plan).await;
            let _ = tx.send(DomainEvent::SidebarLoaded(result));
        }));
    }

    pub(crate) fn in_flight_len(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    fn track(&mut self, task: JoinHandle<()>) {
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(task);
    }
}
