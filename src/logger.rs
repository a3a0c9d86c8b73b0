use chrono::Local;
use colored::*;
use env_logger::{Builder, Env};
use log::{debug, Level};
use std::{env as stdenv, io::Write, path::Path};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the colored `env_logger` used by both binaries.
///
/// `RUST_LOG` selects the filter (default `info`). With `RUST_LOG=trace` the
/// prefix shrinks to `file:line level: message`.
pub fn setup_logger() {
    let this_script_name = Path::new(&stdenv::args().next().unwrap_or_default())
        .file_name()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default()
        .to_owned();
    let compact = matches!(stdenv::var("RUST_LOG"), Ok(val) if val.to_lowercase() == "trace");
    let prefix = format!("{}_{}", this_script_name, VERSION);

    let result = Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = colored_level(record.level());
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            if compact {
                writeln!(buf, "{}:{} {}: {}", file, line, level, record.args())
            } else {
                writeln!(
                    buf,
                    "{}:{} [{} {}]{}: {}",
                    file,
                    line,
                    prefix.purple(),
                    Local::now().format("%Y%m%d %H:%M:%S").to_string().purple(),
                    level,
                    record.args()
                )
            }
        })
        .try_init();

    // A second call (tests, embedding) keeps the first logger.
    if result.is_ok() {
        debug!("Logger initialized");
    }
}

/// Level label padded to five columns and colored per severity.
pub fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Error => format!("{}", level).red(),
        Level::Warn => format!(" {}", level).yellow(),
        Level::Info => format!(" {}", level).green(),
        Level::Debug => format!("{}", level).blue(),
        Level::Trace => format!("{}", level).purple(),
    }
}
