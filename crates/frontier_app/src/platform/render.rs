use std::fmt::Write;

use frontier_core::{
    ArticleCard, CardIcon, FeaturedCard, HomeViewModel, Notification, NotificationKind,
    SubscriptionView,
};

pub fn render_home(view: &HomeViewModel, revision: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Featured Articles (revision {revision}) ===");
    if view.featured.is_empty() {
        let _ = writeln!(out, "  (no articles yet)");
    }
    for card in &view.featured {
        render_featured(&mut out, card);
    }

    let _ = writeln!(out, "=== Recent Articles ===");
    for card in &view.recent {
        render_article(&mut out, card);
    }

    render_subscription(&mut out, &view.subscription);
    out
}

pub fn render_subscription_line(view: &SubscriptionView) -> String {
    let mut out = String::new();
    render_subscription(&mut out, view);
    out
}

pub fn render_notification(notification: &Notification, timestamp: &str) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Invalid => "!!",
        NotificationKind::Failure => "xx",
    };
    format!(
        "[{timestamp}] {marker} {}: {}",
        notification.title, notification.message
    )
}

fn render_featured(out: &mut String, card: &FeaturedCard) {
    let _ = writeln!(
        out,
        "  [{}] {} | {}",
        icon_label(card.icon),
        card.category,
        card.title
    );
    if !card.description.is_empty() {
        let _ = writeln!(out, "      {}", card.description);
    }
    let _ = writeln!(out, "      {}  Read more -> {}", card.date, card.href);
}

fn render_article(out: &mut String, card: &ArticleCard) {
    let _ = writeln!(
        out,
        "  [{}] {} | {} ({})  {}",
        icon_label(card.icon),
        card.category,
        card.title,
        card.date,
        card.href
    );
}

fn render_subscription(out: &mut String, view: &SubscriptionView) {
    let _ = writeln!(out, "=== Stay Updated ===");
    let input = if view.email.is_empty() {
        "Enter your email"
    } else {
        view.email.as_str()
    };
    let _ = writeln!(out, "  <{input}> [{}]", view.button_label);
}

fn icon_label(icon: CardIcon) -> &'static str {
    match icon {
        CardIcon::BrainCircuit => "brain",
        CardIcon::Cpu => "cpu",
        CardIcon::Eye => "eye",
    }
}
