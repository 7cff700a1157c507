use crate::Result;
use async_trait::async_trait;
use derive_builder::Builder;
use strum::{Display, EnumString};

pub mod desktop;
pub mod pushover;
pub use desktop::DesktopNotifier;
pub use pushover::PushoverNotifier;

#[cfg(test)]
use mockall::automock;

pub const TRACKING_UPDATE_TITLE: &str = "Tracking Update";
pub const TRACKING_UPDATE_SOUND: &str = "magic";
pub const TRACKING_UPDATE_PRIORITY: i8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Notification {
    pub message: String,
    pub title: String,
    #[builder(default)]
    pub sound: Option<String>,
    #[builder(default)]
    pub priority: i8,
}

impl Notification {
    /// The message sent when the tracking text changes to `snapshot`.
    pub fn tracking_update<S: AsRef<str>>(snapshot: S) -> Self {
        Self {
            message: format!("New tracking update: {}", snapshot.as_ref()),
            title: String::from(TRACKING_UPDATE_TITLE),
            sound: Some(String::from(TRACKING_UPDATE_SOUND)),
            priority: TRACKING_UPDATE_PRIORITY,
        }
    }
}

/// Something that can deliver a [`Notification`] to the user.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers the notification, returning a short human-readable receipt.
    async fn send(&self, notification: &Notification) -> Result<String>;
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, clap::ValueEnum,
)]
#[strum(serialize_all = "kebab-case")]
pub enum NotifierKind {
    #[default]
    Pushover,
    Desktop,
}
