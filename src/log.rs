//! Minimal leveled logging to stderr.

use std::fmt::Display;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Log level for filtering messages.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
  Info = 1,
  Warn = 2,
  Error = 3,
}

impl Display for Level {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Level::Info => write!(f, "INFO"),
      Level::Warn => write!(f, "WARN"),
      Level::Error => write!(f, "ERROR"),
    }
  }
}

static MAX_LEVEL: AtomicU8 = AtomicU8::new(Level::Warn as u8);

/// Only messages at `level` or above get written.
pub fn set_max_level(level: Level) {
  MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn enabled(level: Level) -> bool {
  level as u8 >= MAX_LEVEL.load(Ordering::Relaxed)
}

/// Use the `info!`, `warn!`, or `error!` macros instead.
#[doc(hidden)]
pub fn log(level: Level, message: &str) {
  if !enabled(level) {
    return;
  }
  let mut stderr = StandardStream::stderr(ColorChoice::Auto);
  let mut spec = ColorSpec::new();
  match level {
    Level::Warn => {
      spec.set_fg(Some(Color::Yellow)).set_bold(true);
    }
    Level::Error => {
      spec.set_fg(Some(Color::Red)).set_bold(true);
    }
    Level::Info => {
      spec.clear();
    }
  }
  // a broken stderr is not worth failing a run over
  let _ = stderr.set_color(&spec);
  let _ = writeln!(stderr, "[{:5}] {}", level, message);
  let _ = stderr.reset();
}

#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => {{
    if cfg!(not(test)) {
      $crate::log::log($crate::log::Level::Info, &format!($($arg)*));
    }
  }};
}

#[macro_export]
macro_rules! warn {
  ($($arg:tt)*) => {{
    if cfg!(not(test)) {
      $crate::log::log($crate::log::Level::Warn, &format!($($arg)*));
    }
  }};
}

#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => {{
    if cfg!(not(test)) {
      $crate::log::log($crate::log::Level::Error, &format!($($arg)*));
    }
  }};
}
