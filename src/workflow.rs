//! One tracking check, start to finish.

use crate::{
    Config, Result,
    browser::TrackingSession,
    extract,
    notify::Notifier,
    state::StateStore,
    tracker::{self, Change},
};
use log::{info, warn};
use tokio::time::sleep;

/// Submits the tracking form and returns the current snapshot.
///
/// Every error here ends the run. A result region that never shows up is not an error: the page
/// is reloaded and whatever is rendered afterwards gets extracted.
pub async fn drive<S>(session: &mut S, config: &Config) -> Result<String>
where
    S: TrackingSession + ?Sized,
{
    let timings = config.timings();

    session.navigate(config.tracking_url()).await?;
    info!("Page loaded successfully");
    sleep(timings.load_settle()).await;

    info!("Form submission...");
    session
        .fill_form(
            config.order_id(),
            config.postal_code(),
            timings.keystroke_delay(),
        )
        .await?;
    info!("Form fields filled");

    session.submit().await?;
    info!("Form submitted");

    if session
        .wait_for_result(timings.result_timeout(), timings.poll_interval())
        .await?
    {
        info!("Tracking result updated");
    } else {
        warn!("Page reload triggered due to timeout");
        session.reload().await?;
    }
    sleep(timings.result_settle()).await;

    info!("Retrieving data...");
    let blocks = session.text_blocks().await?;
    Ok(extract::snapshot(blocks))
}

/// Runs [`drive`] and closes the session afterwards, whatever the outcome.
pub async fn check<S>(mut session: S, config: &Config) -> Result<String>
where
    S: TrackingSession,
{
    let snapshot = drive(&mut session, config).await;
    if let Err(e) = session.close().await {
        warn!("Failed to close browser: {e}");
    }
    snapshot
}

/// A full run on an already launched session: check the page, then record any change.
///
/// `last_seen` is read before the browser is launched. On a fatal error nothing is written and
/// nobody is notified.
pub async fn run<S, N>(
    session: S,
    config: &Config,
    last_seen: &str,
    store: &StateStore,
    notifier: &N,
) -> Result<Change>
where
    S: TrackingSession,
    N: Notifier + ?Sized,
{
    let current = check(session, config).await?;
    Ok(tracker::record(&current, last_seen, store, notifier).await)
}
