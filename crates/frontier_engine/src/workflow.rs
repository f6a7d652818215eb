use std::sync::{Arc, Mutex, PoisonError};

use frontier_core::{
    update, Effect, Msg, SubmissionOutcome, SubscriptionState, SubscriptionView,
};
use frontier_logging::{frontier_debug, frontier_info, frontier_warn};
use tokio::task::JoinHandle;

use crate::{NotificationSink, Subscriber};

/// What a call to [`SubscriptionWorkflow::submit`] did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input failed the shape check; an invalid notification was emitted.
    Rejected,
    /// A submission was already in flight; nothing changed.
    Ignored,
    /// The subscription action is running.
    Pending(PendingSubmission),
}

/// Completion of an in-flight subscription.
///
/// Dropping this does not cancel the request; it always runs to completion.
#[derive(Debug)]
pub struct PendingSubmission {
    task: JoinHandle<()>,
}

impl PendingSubmission {
    pub async fn completed(self) {
        if let Err(err) = self.task.await {
            frontier_warn!("Subscription task ended abnormally: {}", err);
        }
    }
}

struct Shared {
    state: Mutex<SubscriptionState>,
    sink: Arc<dyn NotificationSink>,
}

impl Shared {
    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = std::mem::take(&mut *guard);
        let (state, effects) = update(state, msg);
        *guard = state;
        effects
    }
}

/// Drives the newsletter form state machine and runs its effects.
#[derive(Clone)]
pub struct SubscriptionWorkflow {
    shared: Arc<Shared>,
    subscriber: Arc<dyn Subscriber>,
}

impl SubscriptionWorkflow {
    pub fn new(subscriber: Arc<dyn Subscriber>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(SubscriptionState::new()),
                sink,
            }),
            subscriber,
        }
    }

    pub fn edit_email(&self, text: impl Into<String>) {
        // Editing never produces effects.
        self.shared.dispatch(Msg::EmailEdited(text.into()));
    }

    /// Validates and submits `input`. Must be called from within a tokio runtime.
    pub fn submit(&self, input: impl Into<String>) -> SubmitOutcome {
        let effects = self.shared.dispatch(Msg::SubmitRequested(input.into()));
        if effects.is_empty() {
            frontier_debug!("Submission ignored while another is in flight");
            return SubmitOutcome::Ignored;
        }

        let mut outcome = SubmitOutcome::Rejected;
        for effect in effects {
            match effect {
                Effect::Notify(notification) => self.shared.sink.notify(notification),
                Effect::Subscribe { email } => {
                    outcome = SubmitOutcome::Pending(self.spawn_subscription(email));
                }
            }
        }
        outcome
    }

    pub fn state(&self) -> SubscriptionState {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// View of the form; `dirty` reports changes since the previous call.
    pub fn take_view(&self) -> SubscriptionView {
        let mut guard = self.shared.state.lock().unwrap_or_else(PoisonError::into_inner);
        let view = guard.view();
        guard.consume_dirty();
        view
    }

    fn spawn_subscription(&self, email: String) -> PendingSubmission {
        frontier_info!("Subscribing email_len={}", email.len());
        let shared = self.shared.clone();
        let subscriber = self.subscriber.clone();
        let task = tokio::spawn(async move {
            let outcome = match subscriber.subscribe(&email).await {
                Ok(()) => SubmissionOutcome::Subscribed,
                Err(err) => {
                    frontier_warn!("Subscription failed: {}", err);
                    SubmissionOutcome::Failed
                }
            };
            for effect in shared.dispatch(Msg::SubmissionFinished(outcome)) {
                if let Effect::Notify(notification) = effect {
                    shared.sink.notify(notification);
                }
            }
        });
        PendingSubmission { task }
    }
}
