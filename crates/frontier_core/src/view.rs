use crate::ContentItem;

/// Number of leading items shown as featured.
pub const FEATURED_COUNT: usize = 3;
/// Exclusive upper bound of the recent slice within the catalog.
pub const RECENT_END: usize = 9;

/// Featured/recent partition of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DerivedView {
    pub featured: Vec<ContentItem>,
    pub recent: Vec<ContentItem>,
}

impl DerivedView {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.recent.is_empty()
    }
}

/// Partition a catalog by position: `[0, 3)` is featured, `[3, 9)` is recent.
///
/// Order is inherited from the input; nothing is sorted, filtered or deduplicated.
pub fn derive_view(items: &[ContentItem]) -> DerivedView {
    let featured_end = items.len().min(FEATURED_COUNT);
    let recent_end = items.len().min(RECENT_END);
    DerivedView {
        featured: items[..featured_end].to_vec(),
        recent: items[featured_end..recent_end].to_vec(),
    }
}
