use std::sync::Once;

use frontier_core::{
    update, Effect, Msg, NotificationKind, Phase, SubmissionOutcome, SubmissionResult,
    SubscriptionState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(frontier_logging::initialize_for_tests);
}

fn submit(state: SubscriptionState, input: &str) -> (SubscriptionState, Vec<Effect>) {
    update(state, Msg::SubmitRequested(input.to_string()))
}

fn notification_kinds(effects: &[Effect]) -> Vec<NotificationKind> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Notify(notification) => Some(notification.kind),
            Effect::Subscribe { .. } => None,
        })
        .collect()
}

#[test]
fn invalid_email_keeps_input_and_stays_idle() {
    init_logging();
    let (state, _) = update(SubscriptionState::new(), Msg::EmailEdited("not-an-email".into()));

    let (mut state, effects) = submit(state, "not-an-email");

    assert_eq!(*state.phase(), Phase::Idle);
    assert_eq!(state.email(), "not-an-email");
    assert_eq!(state.last_result(), Some(SubmissionResult::Invalid));
    assert_eq!(notification_kinds(&effects), vec![NotificationKind::Invalid]);
    match &effects[0] {
        Effect::Notify(notification) => {
            assert_eq!(notification.title, "Invalid email");
            assert_eq!(notification.message, "Please enter a valid email address.");
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert!(state.consume_dirty());
}

#[test]
fn empty_input_is_rejected() {
    init_logging();
    let (state, effects) = submit(SubscriptionState::new(), "");

    assert_eq!(*state.phase(), Phase::Idle);
    assert_eq!(notification_kinds(&effects), vec![NotificationKind::Invalid]);
}

#[test]
fn valid_email_enters_submitting_and_requests_subscription() {
    init_logging();
    let (state, effects) = submit(SubscriptionState::new(), "a@b.com");

    assert_eq!(
        *state.phase(),
        Phase::Submitting {
            email: "a@b.com".to_string()
        }
    );
    assert_eq!(
        effects,
        vec![Effect::Subscribe {
            email: "a@b.com".to_string()
        }]
    );
    let view = state.view();
    assert!(view.submitting);
    assert_eq!(view.button_label, "Subscribing...");
}

#[test]
fn second_submit_while_submitting_has_no_effect() {
    init_logging();
    let (state, _) = submit(SubscriptionState::new(), "a@b.com");
    let before = state.clone();

    let (state, effects) = submit(state, "other@b.com");
    assert_eq!(state, before);
    assert!(effects.is_empty());

    let (state, effects) = submit(state, "garbage");
    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn completion_clears_email_and_returns_to_idle() {
    init_logging();
    let (state, _) = submit(SubscriptionState::new(), "a@b.com");

    let (state, effects) = update(
        state,
        Msg::SubmissionFinished(SubmissionOutcome::Subscribed),
    );

    assert_eq!(state.email(), "");
    assert_eq!(*state.phase(), Phase::Idle);
    assert_eq!(state.last_result(), Some(SubmissionResult::Success));
    assert_eq!(notification_kinds(&effects), vec![NotificationKind::Success]);
    assert_eq!(state.view().button_label, "Subscribe");
}

#[test]
fn failed_completion_preserves_email() {
    init_logging();
    let (state, _) = submit(SubscriptionState::new(), "a@b.com");

    let (state, effects) = update(
        state,
        Msg::SubmissionFinished(SubmissionOutcome::Failed),
    );

    assert_eq!(state.email(), "a@b.com");
    assert_eq!(*state.phase(), Phase::Idle);
    assert_eq!(state.last_result(), Some(SubmissionResult::Failed));
    assert_eq!(notification_kinds(&effects), vec![NotificationKind::Failure]);
}

#[test]
fn stray_completion_while_idle_is_ignored() {
    init_logging();
    let (state, _) = update(SubscriptionState::new(), Msg::EmailEdited("a@b.com".into()));
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::SubmissionFinished(SubmissionOutcome::Subscribed),
    );

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn editing_while_submitting_does_not_change_phase() {
    init_logging();
    let (state, _) = submit(SubscriptionState::new(), "a@b.com");
    let (mut state, effects) = update(state, Msg::EmailEdited("typing@more".into()));

    assert!(effects.is_empty());
    assert_eq!(state.email(), "typing@more");
    assert!(state.phase().is_submitting());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn new_submission_allowed_after_completion() {
    init_logging();
    let (state, _) = submit(SubscriptionState::new(), "a@b.com");
    let (state, _) = update(state, Msg::SubmissionFinished(SubmissionOutcome::Subscribed));

    let (state, effects) = submit(state, "c@d.com");
    assert!(state.phase().is_submitting());
    assert_eq!(effects.len(), 1);
}

#[test]
fn rejected_submit_leaves_stored_email_untouched() {
    init_logging();
    let (state, _) = update(SubscriptionState::new(), Msg::EmailEdited("draft@".into()));

    let (state, effects) = submit(state, "bad");

    assert_eq!(state.email(), "draft@");
    assert_eq!(*state.phase(), Phase::Idle);
    assert_eq!(notification_kinds(&effects), vec![NotificationKind::Invalid]);
}
