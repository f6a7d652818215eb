use crate::{Effect, Msg, Notification, SubmissionOutcome, SubmissionResult, SubscriptionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SubscriptionState, msg: Msg) -> (SubscriptionState, Vec<Effect>) {
    let effects = match msg {
        Msg::EmailEdited(text) => {
            state.set_email(text);
            Vec::new()
        }
        Msg::SubmitRequested(input) => {
            // One request in flight at a time; repeats are dropped without touching state.
            if state.phase().is_submitting() {
                return (state, Vec::new());
            }
            if !is_plausible_email(&input) {
                // The stored input is left as typed so it can be corrected.
                state.reject();
                return (state, vec![Effect::Notify(Notification::invalid_email())]);
            }
            state.begin_submission(input.clone());
            vec![Effect::Subscribe { email: input }]
        }
        Msg::SubmissionFinished(outcome) => {
            if !state.phase().is_submitting() {
                return (state, Vec::new());
            }
            match outcome {
                SubmissionOutcome::Subscribed => {
                    state.finish_submission(SubmissionResult::Success);
                    vec![Effect::Notify(Notification::subscribed())]
                }
                SubmissionOutcome::Failed => {
                    state.finish_submission(SubmissionResult::Failed);
                    vec![Effect::Notify(Notification::subscription_failed())]
                }
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Minimal shape check: non-empty and containing an `@`.
pub fn is_plausible_email(input: &str) -> bool {
    !input.is_empty() && input.contains('@')
}
