use chromiumoxide::error::CdpError;
use notify_rust::error::Error as DesktopError;
use pastey::paste;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use snafu::{Backtrace, GenerateImplicitData, Snafu};
use std::{io::Error as IoError, string::FromUtf8Error};

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("i/o error: {source}"))]
    Io {
        source: IoError,
        backtrace: Backtrace,
    },
    #[snafu(display("invalid utf-8: {source}"))]
    FromUtf8 {
        source: FromUtf8Error,
        backtrace: Backtrace,
    },
    #[snafu(display("browser error: {source}"))]
    Browser {
        source: CdpError,
        backtrace: Backtrace,
    },
    #[snafu(display("http error: {source}"))]
    Http {
        source: HttpError,
        backtrace: Backtrace,
    },
    #[snafu(display("unexpected json: {source}"))]
    Json {
        source: JsonError,
        backtrace: Backtrace,
    },
    #[snafu(display("desktop notification error: {source}"))]
    Desktop {
        source: DesktopError,
        backtrace: Backtrace,
    },
    #[snafu(display("environment variable {name} is not set"))]
    MissingVariable { name: String },
    #[snafu(display("failed to load {url}: {source}"))]
    NavigationFailed { url: String, source: CdpError },
    #[snafu(display("expected 2 form fields matching `{selector}`, found {found}"))]
    FormFieldsNotFound { selector: String, found: usize },
    #[snafu(display("no submit button matching `{selector}`"))]
    SubmitButtonNotFound { selector: String },
    #[snafu(display("pushover token or user key is not configured"))]
    MissingCredentials,
    #[snafu(display("notification rejected with status {status}: {body}"))]
    NotificationRejected { status: u16, body: String },
    #[snafu(display("{message}"))]
    Other { message: String },
}

impl Error {
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            Self::Io { backtrace, .. } => Some(backtrace),
            Self::FromUtf8 { backtrace, .. } => Some(backtrace),
            Self::Browser { backtrace, .. } => Some(backtrace),
            Self::Http { backtrace, .. } => Some(backtrace),
            Self::Json { backtrace, .. } => Some(backtrace),
            Self::Desktop { backtrace, .. } => Some(backtrace),
            _ => None,
        }
    }

    pub fn simple<S: AsRef<str>>(message: S) -> Self {
        Self::Other {
            message: String::from(message.as_ref()),
        }
    }

    pub fn missing_variable<S: AsRef<str>>(name: S) -> Self {
        Self::MissingVariable {
            name: String::from(name.as_ref()),
        }
    }
}

macro_rules! impl_from {
    ($type:path, $error:ident, $base_error:ident) => {
        impl From<$type> for $base_error {
            fn from(error: $type) -> Self {
                Self::$error {
                    source: error,
                    backtrace: Backtrace::generate(),
                }
            }
        }
    };
    ($type:path, $error:ident) => {
        impl_from! { $type, $error, Error }
    };
    ($name:ident) => {
        paste! {
            impl_from! { [<$name Error>], $name }
        }
    };
}

impl_from! {Io}
impl_from! {FromUtf8}
impl_from! {CdpError, Browser}
impl_from! {Http}
impl_from! {Json}
impl_from! {Desktop}

pub type Result<V> = core::result::Result<V, Error>;
