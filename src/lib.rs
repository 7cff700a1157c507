#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate lazy_static;

use camino::Utf8PathBuf;

pub mod browser;
pub mod cli;
pub use cli::Cli;
pub mod config;
pub use config::{Config, Timings};
pub(crate) mod error;
pub use error::{Error, Result};
pub mod extract;
pub mod logging;
pub mod notify;
pub mod state;
pub use state::StateStore;
pub mod tracker;
pub use tracker::Change;
pub mod util;
pub mod workflow;

pub const TRACKING_URL: &str = "https://suivi-sav-orange.sbeglobalservice.com/";

lazy_static! {
    /// Relative, so it lands in whatever directory the scheduler runs us from.
    pub static ref DEFAULT_STATE_FILE: Utf8PathBuf = Utf8PathBuf::from("last_tracking_info.txt");
}
