use crate::{DEFAULT_STATE_FILE, Error, Result, TRACKING_URL, notify::NotifierKind};
use camino::Utf8PathBuf;
use derive_builder::Builder;
use getset::{CopyGetters, Getters};
use std::{env, time::Duration};

pub const ORDER_ID_VAR: &str = "ORDER_ID";
pub const POSTAL_CODE_VAR: &str = "POSTAL_CODE";
pub const PUSHOVER_TOKEN_VAR: &str = "PUSHOVER_TOKEN";
pub const PUSHOVER_USER_VAR: &str = "PUSHOVER_USER";
pub const CRON_VAR: &str = "CRON";

pub const DEFAULT_LOAD_SETTLE: Duration = Duration::from_secs(5);
pub const DEFAULT_KEYSTROKE_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_RESULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_RESULT_SETTLE: Duration = Duration::from_secs(3);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Waits used while driving the tracking page.
///
/// The page is a third-party script application that gives no "ready" signal, so these are
/// heuristics rather than synchronisation. The settle-then-act order is what matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Timings {
    /// Pause after the initial navigation before touching the form.
    #[builder(default = "DEFAULT_LOAD_SETTLE")]
    load_settle: Duration,
    /// Pause between typed characters.
    #[builder(default = "DEFAULT_KEYSTROKE_DELAY")]
    keystroke_delay: Duration,
    /// How long to wait for the result region after submitting.
    #[builder(default = "DEFAULT_RESULT_TIMEOUT")]
    result_timeout: Duration,
    /// Pause after submission (or reload) before extracting.
    #[builder(default = "DEFAULT_RESULT_SETTLE")]
    result_settle: Duration,
    #[builder(default = "DEFAULT_POLL_INTERVAL")]
    poll_interval: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            load_settle: DEFAULT_LOAD_SETTLE,
            keystroke_delay: DEFAULT_KEYSTROKE_DELAY,
            result_timeout: DEFAULT_RESULT_TIMEOUT,
            result_settle: DEFAULT_RESULT_SETTLE,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Timings {
    /// No waiting at all; used when the page is not a real browser.
    pub fn immediate() -> Self {
        Self {
            load_settle: Duration::ZERO,
            keystroke_delay: Duration::ZERO,
            result_timeout: Duration::ZERO,
            result_settle: Duration::ZERO,
            poll_interval: Duration::ZERO,
        }
    }
}

/// `true` when `CRON` is exactly `"true"`.
pub fn cron_requested<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(CRON_VAR).is_some_and(|v| v == "true")
}

#[inline]
pub fn cron_requested_in_env() -> bool {
    cron_requested(|name| env::var(name).ok())
}

#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct Config {
    #[getset(get = "pub")]
    pub(crate) order_id: String,
    #[getset(get = "pub")]
    pub(crate) postal_code: String,
    #[getset(get = "pub")]
    pub(crate) pushover_token: Option<String>,
    #[getset(get = "pub")]
    pub(crate) pushover_user: Option<String>,
    /// Set when `CRON=true`. Whether stdout is a terminal is checked separately.
    #[getset(get_copy = "pub")]
    pub(crate) cron: bool,
    #[getset(get = "pub")]
    pub(crate) tracking_url: String,
    #[getset(get = "pub")]
    pub(crate) state_file: Utf8PathBuf,
    #[getset(get_copy = "pub")]
    pub(crate) notifier: NotifierKind,
    #[getset(get_copy = "pub")]
    pub(crate) headless: bool,
    #[getset(get_copy = "pub")]
    pub(crate) timings: Timings,
}

impl Config {
    /// Reads the process environment. Call `dotenv` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).ok_or_else(|| Error::missing_variable(name));
        // Empty credentials are as good as none.
        let optional = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Ok(Self {
            order_id: required(ORDER_ID_VAR)?,
            postal_code: required(POSTAL_CODE_VAR)?,
            pushover_token: optional(PUSHOVER_TOKEN_VAR),
            pushover_user: optional(PUSHOVER_USER_VAR),
            cron: cron_requested(&lookup),
            tracking_url: String::from(TRACKING_URL),
            state_file: DEFAULT_STATE_FILE.clone(),
            notifier: NotifierKind::default(),
            headless: true,
            timings: Timings::default(),
        })
    }
}
