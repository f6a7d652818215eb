use crate::view_model::SubscriptionView;

/// Phase of the newsletter form. Only `Idle` accepts a new submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A request for `email` is in flight.
    Submitting { email: String },
}

impl Phase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Phase::Submitting { .. })
    }
}

/// Result of the most recent submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Invalid,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscriptionState {
    email: String,
    phase: Phase,
    last_result: Option<SubmissionResult>,
    dirty: bool,
}

impl SubscriptionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn last_result(&self) -> Option<SubmissionResult> {
        self.last_result
    }

    pub fn view(&self) -> SubscriptionView {
        SubscriptionView::new(&self.email, self.phase.is_submitting(), self.dirty)
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_email(&mut self, email: String) {
        if self.email != email {
            self.email = email;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_submission(&mut self, email: String) {
        self.email = email.clone();
        self.phase = Phase::Submitting { email };
        self.dirty = true;
    }

    pub(crate) fn reject(&mut self) {
        self.last_result = Some(SubmissionResult::Invalid);
        self.dirty = true;
    }

    /// Returns to `Idle`; the input is cleared only on success.
    pub(crate) fn finish_submission(&mut self, result: SubmissionResult) {
        if result == SubmissionResult::Success {
            self.email.clear();
        }
        self.phase = Phase::Idle;
        self.last_result = Some(result);
        self.dirty = true;
    }
}
