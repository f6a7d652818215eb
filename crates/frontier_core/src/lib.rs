//! Frontier core: pure catalog partitioning and the subscription state machine.
mod content;
mod effect;
mod msg;
mod state;
mod update;
mod view;
mod view_model;

pub use content::{CatalogSnapshot, ContentItem};
pub use effect::{Effect, Notification, NotificationKind};
pub use msg::{Msg, SubmissionOutcome};
pub use state::{Phase, SubmissionResult, SubscriptionState};
pub use update::{is_plausible_email, update};
pub use view::{derive_view, DerivedView, FEATURED_COUNT, RECENT_END};
pub use view_model::{
    ArticleCard, CardIcon, FeaturedCard, HomeViewModel, SubscriptionView, PLACEHOLDER_IMAGE,
};
