use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use frontier_core::Notification;
use frontier_engine::{
    ChannelNotificationSink, ContentStore, HttpContentStore, HttpSubscriber, JsonFileStore,
    LastGoodStore, PageSession, SessionParts, SimulatedSubscriber, SubmitOutcome, Subscriber,
};
use frontier_logging::{frontier_info, frontier_warn};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::cli::Cli;
use super::config::{http_settings, AppConfig, CatalogSource, SubscriberConfig};
use super::{logging, render};

/// Interval at which pending notifications and form changes are flushed to the terminal.
const RENDER_TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = &cli.catalog {
        config.catalog = CatalogSource::File { path: path.clone() };
    }

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(config.log_destination, level);

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(run(config, cli.once))
}

async fn run(config: AppConfig, once: bool) -> anyhow::Result<()> {
    let (notify_tx, notify_rx) = mpsc::channel::<Notification>();
    let session = PageSession::open(SessionParts {
        store: build_store(&config.catalog)?,
        subscriber: build_subscriber(&config)?,
        sink: Arc::new(ChannelNotificationSink::new(notify_tx)),
        sync: config.sync_settings(),
    })
    .await;

    let mut published = session.catalog();
    println!(
        "{}",
        render::render_home(&session.home_view(), published.revision)
    );
    if once {
        session.close().await;
        return Ok(());
    }

    let mut updates = session.catalog_updates();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut render_tick = tokio::time::interval(RENDER_TICK);
    // Initial render above covers the first state of the form.
    session.workflow().take_view();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                frontier_info!("Interrupted; shutting down");
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = session.catalog();
                if latest.view != published.view {
                    println!("{}", render::render_home(&session.home_view(), latest.revision));
                }
                published = latest;
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => submit_line(&session, line.trim()),
                    Ok(None) => break,
                    Err(err) => {
                        frontier_warn!("Failed to read stdin: {}", err);
                        break;
                    }
                }
            }
            _ = render_tick.tick() => {
                flush_notifications(&notify_rx);
                let view = session.workflow().take_view();
                if view.dirty {
                    print!("{}", render::render_subscription_line(&view));
                }
            }
        }
    }

    session.close().await;
    flush_notifications(&notify_rx);
    Ok(())
}

fn submit_line(session: &PageSession, email: &str) {
    session.workflow().edit_email(email);
    match session.workflow().submit(email) {
        SubmitOutcome::Pending(_) => frontier_info!("Submission in flight"),
        SubmitOutcome::Ignored => println!("A subscription is already in progress."),
        SubmitOutcome::Rejected => {}
    }
}

fn flush_notifications(rx: &mpsc::Receiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        println!("{}", render::render_notification(&notification, &timestamp));
    }
}

fn build_store(source: &CatalogSource) -> anyhow::Result<Arc<dyn ContentStore>> {
    let store: Arc<dyn ContentStore> = match source {
        CatalogSource::File { path } => {
            frontier_info!("Reading catalog from {:?}", path);
            Arc::new(LastGoodStore::new(JsonFileStore::new(path)))
        }
        CatalogSource::Http { url, timeout_ms } => {
            frontier_info!("Fetching catalog from {}", url);
            let store = HttpContentStore::new(url, http_settings(*timeout_ms))
                .with_context(|| format!("invalid catalog url {url}"))?;
            Arc::new(LastGoodStore::new(store))
        }
    };
    Ok(store)
}

fn build_subscriber(config: &AppConfig) -> anyhow::Result<Arc<dyn Subscriber>> {
    let subscriber: Arc<dyn Subscriber> = match &config.subscriber {
        SubscriberConfig::Simulated => {
            Arc::new(SimulatedSubscriber::new(config.completion_delay()))
        }
        SubscriberConfig::Http { url, timeout_ms } => Arc::new(
            HttpSubscriber::new(url, http_settings(*timeout_ms))
                .with_context(|| format!("invalid subscriber url {url}"))?,
        ),
    };
    Ok(subscriber)
}
