use crate::util::timestamp_now;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter, Record};
use std::{
    env,
    io::{self, IsTerminal, Write},
};

/// Cron mode is either asked for or implied by stdout not being a terminal.
pub fn is_cron(cron_flag: bool) -> bool {
    cron_flag || !io::stdout().is_terminal()
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// `2024-03-01T08:15:30.123Z [INFO]: message`
pub fn plain_line(timestamp: &str, record: &Record) -> String {
    format!("{timestamp} [{}]: {}", level_tag(record.level()), record.args())
}

/// Cron runs get plain timestamped lines, interactive runs get pretty_env_logger's coloured
/// output. Both write to `target`. `RUST_LOG` overrides the default `info` filter.
pub fn builder(cron: bool, target: Target) -> Builder {
    let mut builder = if cron {
        let mut builder = Builder::new();
        builder.format(|buf, record| writeln!(buf, "{}", plain_line(&timestamp_now(), record)));
        builder
    } else {
        pretty_env_logger::formatted_timed_builder()
    };
    builder.target(target).filter_level(LevelFilter::Info);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
}

/// Installs the global logger on stdout.
pub fn init(cron: bool) {
    builder(cron, Target::Stdout).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[test]
    fn plain_lines_are_tagged() {
        let line = plain_line(
            "2024-03-01T08:15:30Z",
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("No valid tracking info retrieved."))
                .build(),
        );
        assert_eq!(
            line,
            "2024-03-01T08:15:30Z [WARN]: No valid tracking info retrieved."
        );
    }

    /// Collects everything a logger writes.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn log_through(cron: bool, message: &str) -> String {
        let captured = Captured::default();
        let logger = builder(cron, Target::Pipe(Box::new(captured.clone()))).build();
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("parcel_watch")
                .args(format_args!("{message}"))
                .build(),
        );
        logger.flush();
        captured.text()
    }

    #[test]
    fn both_modes_write_to_the_given_target() {
        let pretty = log_through(false, "No new tracking updates");
        assert!(pretty.contains("No new tracking updates"), "{pretty}");
        let line = log_through(true, "Script execution started");
        assert!(line.ends_with(" [INFO]: Script execution started\n"), "{line}");
    }

    #[test]
    fn cron_flag_forces_cron() {
        assert!(is_cron(true));
    }
}
