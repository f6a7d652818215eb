use std::sync::Arc;

use frontier_core::HomeViewModel;
use tokio::sync::watch;

use crate::{
    CatalogSynchronizer, ContentStore, NotificationSink, Publication, Subscriber,
    SubscriptionWorkflow, SyncHandle, SyncSettings,
};

/// Collaborators needed to open a [`PageSession`].
pub struct SessionParts {
    pub store: Arc<dyn ContentStore>,
    pub subscriber: Arc<dyn Subscriber>,
    pub sink: Arc<dyn NotificationSink>,
    pub sync: SyncSettings,
}

/// Page-lifetime context: owns one synchronizer timer and one subscription form.
///
/// Sessions are independent; closing or dropping one stops only its own polling.
pub struct PageSession {
    sync: SyncHandle,
    workflow: SubscriptionWorkflow,
}

impl PageSession {
    pub async fn open(parts: SessionParts) -> Self {
        let sync = CatalogSynchronizer::new(parts.store, parts.sync)
            .start()
            .await;
        let workflow = SubscriptionWorkflow::new(parts.subscriber, parts.sink);
        Self { sync, workflow }
    }

    pub fn workflow(&self) -> &SubscriptionWorkflow {
        &self.workflow
    }

    pub fn catalog(&self) -> Arc<Publication> {
        self.sync.current()
    }

    pub fn catalog_updates(&self) -> watch::Receiver<Arc<Publication>> {
        self.sync.subscribe()
    }

    pub fn home_view(&self) -> HomeViewModel {
        HomeViewModel::build(&self.sync.current().view, &self.workflow.state())
    }

    pub async fn close(self) {
        self.sync.shutdown().await;
    }
}
