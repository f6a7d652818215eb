//! Frontier engine: catalog polling, subscription effects and their IO adapters.
mod file_store;
mod http;
mod notify;
mod session;
mod store;
mod subscriber;
mod sync;
mod types;
mod workflow;

pub use file_store::JsonFileStore;
pub use http::{HttpContentStore, HttpSettings, HttpSubscriber};
pub use notify::{ChannelNotificationSink, LogNotificationSink, NotificationSink};
pub use session::{PageSession, SessionParts};
pub use store::{ContentStore, FallibleContentStore, LastGoodStore, MemoryContentStore};
pub use subscriber::{SimulatedSubscriber, Subscriber, DEFAULT_COMPLETION_DELAY};
pub use sync::{CatalogSynchronizer, SyncHandle, SyncSettings, DEFAULT_POLL_INTERVAL};
pub use types::{HttpFailure, Publication, StoreError, SubscribeError};
pub use workflow::{PendingSubmission, SubmitOutcome, SubscriptionWorkflow};
