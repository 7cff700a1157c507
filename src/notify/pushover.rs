use super::{Notification, Notifier};
use crate::{Config, Error, Result};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

pub const PUSHOVER_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

/// Form body of a Pushover message request.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct PushoverMessage<'a> {
    token: &'a str,
    user: &'a str,
    message: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    sound: Option<&'a str>,
    priority: i8,
}

#[derive(Debug, Deserialize)]
struct PushoverReceipt {
    status: i32,
    #[serde(default)]
    request: String,
}

#[derive(Debug, Clone)]
pub struct PushoverNotifier {
    client: reqwest::Client,
    token: Option<String>,
    user: Option<String>,
}

impl PushoverNotifier {
    pub fn new(token: Option<String>, user: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            user,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pushover_token().clone(), config.pushover_user().clone())
    }

    fn message<'a>(&'a self, notification: &'a Notification) -> Result<PushoverMessage<'a>> {
        let (Some(token), Some(user)) = (self.token.as_deref(), self.user.as_deref()) else {
            return Err(Error::MissingCredentials);
        };
        Ok(PushoverMessage {
            token,
            user,
            message: &notification.message,
            title: &notification.title,
            sound: notification.sound.as_deref(),
            priority: notification.priority,
        })
    }
}

#[async_trait]
impl Notifier for PushoverNotifier {
    async fn send(&self, notification: &Notification) -> Result<String> {
        let message = self.message(notification)?;
        debug!("Posting notification to {PUSHOVER_ENDPOINT}");
        let response = self.client.post(PUSHOVER_ENDPOINT).form(&message).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::NotificationRejected {
                status: status.as_u16(),
                body,
            });
        }
        let receipt: PushoverReceipt = serde_json::from_str(&body)?;
        if receipt.status != 1 {
            return Err(Error::NotificationRejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(format!("request {}", receipt.request))
    }
}
