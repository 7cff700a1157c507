use super::{Notification, Notifier};
use crate::{Error, Result};
use async_trait::async_trait;
use notify_rust::Notification as Toast;

/// Shows the notification on the local desktop instead of pushing it to a phone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn send(&self, notification: &Notification) -> Result<String> {
        let mut toast = Toast::new();
        toast
            .appname(env!("CARGO_PKG_NAME"))
            .summary(&notification.title)
            .body(&notification.message);
        // The notification server is talked to synchronously.
        tokio::task::spawn_blocking(move || toast.show().map(|_| ()))
            .await
            .map_err(|e| Error::simple(e.to_string()))??;
        Ok(String::from("shown on desktop"))
    }
}
