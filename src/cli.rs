use crate::{
    Config, Error, Result,
    browser::{ChromeSession, LaunchOptions, Selectors},
    config::TimingsBuilder,
    notify::{DesktopNotifier, Notifier, NotifierKind, PushoverNotifier},
    state::StateStore,
    tracker::Change,
    workflow,
};
use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use std::time::Duration;

/// Checks the tracking page once and notifies if the status changed.
#[derive(Debug, Parser)]
#[command(version, author)]
#[command(rename_all = "kebab")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// File holding the last seen tracking text.
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<Utf8PathBuf>,
    /// Tracking page to load.
    #[arg(long)]
    pub url: Option<String>,
    /// Where to send the change notification.
    #[arg(long, value_enum)]
    pub notifier: Option<NotifierKind>,
    /// Show the browser window.
    #[arg(long)]
    pub headful: bool,
    /// Seconds to wait after the page loads before filling the form.
    #[arg(long, value_name = "SECS")]
    pub load_settle: Option<u64>,
    /// Seconds to wait for the result region before reloading.
    #[arg(long, value_name = "SECS")]
    pub result_timeout: Option<u64>,
    /// Seconds to wait after submitting before reading the page.
    #[arg(long, value_name = "SECS")]
    pub result_settle: Option<u64>,
}

impl Default for Cli {
    fn default() -> Self {
        Self::parse()
    }
}

impl Cli {
    /// Layers the command line options over the environment configuration.
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(ref path) = self.state_file {
            config.state_file = path.clone();
        }
        if let Some(ref url) = self.url {
            config.tracking_url = url.clone();
        }
        if let Some(notifier) = self.notifier {
            config.notifier = notifier;
        }
        if self.headful {
            config.headless = false;
        }
        let current = config.timings();
        let secs_or = |secs: Option<u64>, default: Duration| secs.map_or(default, Duration::from_secs);
        config.timings = TimingsBuilder::default()
            .load_settle(secs_or(self.load_settle, current.load_settle()))
            .keystroke_delay(current.keystroke_delay())
            .result_timeout(secs_or(self.result_timeout, current.result_timeout()))
            .result_settle(secs_or(self.result_settle, current.result_settle()))
            .poll_interval(current.poll_interval())
            .build()
            .map_err(|e| Error::simple(e.to_string()))?;
        Ok(())
    }

    pub async fn execute(self, mut config: Config) -> Result<Change> {
        self.apply(&mut config)?;
        debug!("Running with {config:?}");

        let store = StateStore::new(config.state_file().clone());
        let last_seen = store.load();
        let notifier: Box<dyn Notifier> = match config.notifier() {
            NotifierKind::Pushover => Box::new(PushoverNotifier::from_config(&config)),
            NotifierKind::Desktop => Box::new(DesktopNotifier),
        };
        let options = LaunchOptions {
            headless: config.headless(),
            ..LaunchOptions::default()
        };
        let session = ChromeSession::launch(&options, Selectors::default()).await?;
        workflow::run(session, &config, &last_seen, &store, notifier.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ORDER_ID_VAR, POSTAL_CODE_VAR};
    use pretty_assertions::assert_eq;

    fn config() -> Config {
        Config::from_lookup(|name| match name {
            ORDER_ID_VAR => Some(String::from("A123")),
            POSTAL_CODE_VAR => Some(String::from("75001")),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn no_options_keep_environment() {
        let cli = Cli::try_parse_from(["parcel-watch"]).unwrap();
        let mut config = config();
        cli.apply(&mut config).unwrap();
        assert_eq!(config.state_file().as_str(), "last_tracking_info.txt");
        assert_eq!(config.notifier(), NotifierKind::Pushover);
        assert!(config.headless());
        assert_eq!(config.timings(), crate::config::Timings::default());
    }

    #[test]
    fn options_override() {
        let cli = Cli::try_parse_from([
            "parcel-watch",
            "--state-file",
            "/tmp/parcel.txt",
            "--url",
            "http://localhost:8080/",
            "--notifier",
            "desktop",
            "--headful",
            "--result-timeout",
            "30",
        ])
        .unwrap();
        let mut config = config();
        cli.apply(&mut config).unwrap();
        assert_eq!(config.state_file().as_str(), "/tmp/parcel.txt");
        assert_eq!(config.tracking_url(), "http://localhost:8080/");
        assert_eq!(config.notifier(), NotifierKind::Desktop);
        assert!(!config.headless());
        assert_eq!(config.timings().result_timeout(), Duration::from_secs(30));
        assert_eq!(config.timings().load_settle(), Duration::from_secs(5));
    }
}
