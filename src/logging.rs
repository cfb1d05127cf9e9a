// src/logging.rs
//
// File logging behind the `log` facade. Lines look like
//   [00:00:01.503][INFO] Session: AwaitingLogin -> Redirecting
// and go to `<store dir>/debug.log`. Level comes from RUST_LOG (default info).

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

use crate::config::consts::LOG_FILE;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the file logger under `dir`. Only the first call in a process
/// takes effect; later calls still make sure the directory exists.
pub fn init(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;
    start();

    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .target(Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log_facade::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log_facade::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log_facade::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log_facade::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }
}
