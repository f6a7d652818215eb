use std::sync::{Arc, Once};
use std::time::Duration;

use frontier_core::{CardIcon, ContentItem};
use frontier_engine::{
    LogNotificationSink, MemoryContentStore, PageSession, SessionParts, SimulatedSubscriber,
    SubmitOutcome, SyncSettings,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(frontier_logging::initialize_for_tests);
}

fn posts(n: usize) -> Vec<ContentItem> {
    (1..=n)
        .map(|i| ContentItem {
            id: format!("p{i}"),
            title: format!("Post {i}"),
            slug: format!("post-{i}"),
            ..ContentItem::default()
        })
        .collect()
}

fn parts(store: Arc<MemoryContentStore>) -> SessionParts {
    SessionParts {
        store,
        subscriber: Arc::new(SimulatedSubscriber::default()),
        sink: Arc::new(LogNotificationSink),
        sync: SyncSettings::default(),
    }
}

#[tokio::test(start_paused = true)]
async fn home_view_combines_catalog_and_form() {
    init_logging();
    let session = PageSession::open(parts(Arc::new(MemoryContentStore::new(posts(5))))).await;
    session.workflow().edit_email("reader@example.com");

    let home = session.home_view();

    assert_eq!(home.featured.len(), 3);
    assert_eq!(home.featured[1].icon, CardIcon::Cpu);
    assert_eq!(home.recent.len(), 2);
    assert_eq!(home.recent[0].href, "/blog/post-4/");
    assert_eq!(home.subscription.email, "reader@example.com");
}

#[tokio::test(start_paused = true)]
async fn sessions_poll_independently() {
    init_logging();
    let store_a = Arc::new(MemoryContentStore::new(posts(2)));
    let store_b = Arc::new(MemoryContentStore::new(posts(2)));
    let session_a = PageSession::open(parts(store_a.clone())).await;
    let session_b = PageSession::open(parts(store_b.clone())).await;

    session_a.close().await;
    store_a.replace(posts(9));
    store_b.replace(posts(9));
    let mut updates = session_b.catalog_updates();
    updates.changed().await.unwrap();

    assert_eq!(session_b.catalog().snapshot.len(), 9);
    assert_eq!(session_b.home_view().recent.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn submission_does_not_disturb_catalog_polling() {
    init_logging();
    let store = Arc::new(MemoryContentStore::new(posts(3)));
    let session = PageSession::open(parts(store.clone())).await;

    let SubmitOutcome::Pending(pending) = session.workflow().submit("a@b.com") else {
        panic!("expected pending submission");
    };
    store.replace(posts(4));
    tokio::time::sleep(Duration::from_millis(2100)).await;
    pending.completed().await;

    assert_eq!(session.catalog().revision, 1);
    assert_eq!(session.home_view().recent.len(), 1);
    assert_eq!(session.home_view().subscription.email, "");
}
