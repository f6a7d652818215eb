use crate::{ContentItem, DerivedView, SubscriptionState};

/// Image shown when an item carries no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    BrainCircuit,
    Cpu,
    Eye,
}

impl CardIcon {
    /// Featured cards rotate icons by position; everything past the second uses `Eye`.
    fn for_featured(index: usize) -> Self {
        match index {
            0 => CardIcon::BrainCircuit,
            1 => CardIcon::Cpu,
            _ => CardIcon::Eye,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub image: String,
    pub href: String,
    pub icon: CardIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub image: String,
    pub image_alt: String,
    pub href: String,
    pub icon: CardIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscriptionView {
    pub email: String,
    pub submitting: bool,
    pub button_label: &'static str,
    pub dirty: bool,
}

impl SubscriptionView {
    pub(crate) fn new(email: &str, submitting: bool, dirty: bool) -> Self {
        Self {
            email: email.to_string(),
            submitting,
            button_label: if submitting { "Subscribing..." } else { "Subscribe" },
            dirty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeViewModel {
    pub featured: Vec<FeaturedCard>,
    pub recent: Vec<ArticleCard>,
    pub subscription: SubscriptionView,
}

impl HomeViewModel {
    pub fn build(view: &DerivedView, subscription: &SubscriptionState) -> Self {
        Self {
            featured: view
                .featured
                .iter()
                .enumerate()
                .map(|(index, item)| FeaturedCard {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    description: item.description.clone(),
                    category: item.category.clone(),
                    date: item.date.clone(),
                    image: image_or_placeholder(item),
                    href: blog_href(&item.slug),
                    icon: CardIcon::for_featured(index),
                })
                .collect(),
            recent: view
                .recent
                .iter()
                .map(|item| ArticleCard {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    description: item.description.clone(),
                    category: item.category.clone(),
                    date: item.date.clone(),
                    image: image_or_placeholder(item),
                    image_alt: format!("{} thumbnail", item.title),
                    href: blog_href(&item.slug),
                    icon: CardIcon::BrainCircuit,
                })
                .collect(),
            subscription: subscription.view(),
        }
    }
}

fn image_or_placeholder(item: &ContentItem) -> String {
    if item.image.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        item.image.clone()
    }
}

// An empty slug still yields a routable path.
fn blog_href(slug: &str) -> String {
    format!("/blog/{slug}/")
}
