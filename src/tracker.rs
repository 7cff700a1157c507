use crate::{
    notify::{Notification, Notifier},
    state::StateStore,
};
use log::{error, info, warn};
use strum::EnumIs;

/// How the current snapshot relates to the last one seen.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum Change {
    Unchanged,
    Updated(String),
    /// Nothing was extracted while something was stored. Never persisted.
    Missing,
}

impl Change {
    pub fn detect<C: AsRef<str>, L: AsRef<str>>(current: C, last_seen: L) -> Self {
        let current = current.as_ref();
        if current == last_seen.as_ref() {
            Self::Unchanged
        } else if current.is_empty() {
            Self::Missing
        } else {
            Self::Updated(String::from(current))
        }
    }
}

/// Compares `current` against `last_seen`, then persists and notifies on a genuine change.
///
/// The state file is written before the notification goes out. Neither a failed write nor a
/// failed notification stops the other.
pub async fn record<N>(
    current: &str,
    last_seen: &str,
    store: &StateStore,
    notifier: &N,
) -> Change
where
    N: Notifier + ?Sized,
{
    let change = Change::detect(current, last_seen);
    match &change {
        Change::Unchanged => info!("No new tracking updates"),
        Change::Missing => warn!("No valid tracking info retrieved."),
        Change::Updated(snapshot) => {
            info!("New tracking info: {snapshot}");
            if let Err(e) = store.save(snapshot) {
                error!("Failed to save tracking info to {}: {e}", store.path());
            }
            match notifier.send(&Notification::tracking_update(snapshot)).await {
                Ok(receipt) => info!("Notification sent: {receipt}"),
                Err(e) => error!("Error sending notification: {e}"),
            }
        }
    }
    change
}
