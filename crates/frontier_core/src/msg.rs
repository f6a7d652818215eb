#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the email input box.
    EmailEdited(String),
    /// User submitted the form with the given input.
    SubmitRequested(String),
    /// The external subscription action finished.
    SubmissionFinished(SubmissionOutcome),
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Subscribed,
    Failed,
}
