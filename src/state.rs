use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use log::warn;
use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
};

/// The last tracking snapshot that triggered a notification, kept in a single text file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: Utf8PathBuf,
}

impl StateStore {
    pub fn new<P: Into<Utf8PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the stored snapshot with surrounding whitespace trimmed.
    ///
    /// A missing file is the first run and reads as empty. Any other failure is logged and also
    /// reads as empty.
    pub fn load(&self) -> String {
        match self.try_load() {
            Ok(value) => value,
            Err(error) => {
                warn!("Could not read {}, assuming no previous state: {error}", self.path);
                String::new()
            }
        }
    }

    fn try_load(&self) -> Result<String> {
        match fs::read(&self.path) {
            Ok(data) => Ok(String::from_utf8(data)?.trim().to_string()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(error) => Err(error.into()),
        }
    }

    /// Overwrites the file with `value` as given.
    pub fn save<S: AsRef<str>>(&self, value: S) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        file.write_all(value.as_ref().as_bytes())?;
        Ok(())
    }
}
