/// Side effects requested by the subscription state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient message through the notification sink.
    Notify(Notification),
    /// Run the external subscription action for `email`.
    Subscribe { email: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Invalid,
    /// Only produced when a real subscriber reports an error.
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn invalid_email() -> Self {
        Self::new(
            NotificationKind::Invalid,
            "Invalid email",
            "Please enter a valid email address.",
        )
    }

    pub fn subscribed() -> Self {
        Self::new(
            NotificationKind::Success,
            "Subscription successful!",
            "Thank you for subscribing to our newsletter.",
        )
    }

    pub fn subscription_failed() -> Self {
        Self::new(
            NotificationKind::Failure,
            "Subscription failed",
            "We couldn't complete your subscription. Please try again.",
        )
    }

    fn new(kind: NotificationKind, title: &str, message: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}
