#![doc(
  html_playground_url = "https://play.rust-lang.org/",
  test(no_crate_inject, attr(deny(warnings)))
)]

#[macro_use]
extern crate log;

use log::{Level, LevelFilter, Metadata, Record};

pub mod item_class;

pub use item_class::{ItemClassTable, TableError};

/// Initializes the logger at `Info`. Calling this more than once is a no-op.
pub fn init(name: &'static str) { init_with_level(name, LevelFilter::Info) }

pub fn init_with_level(name: &'static str, level: LevelFilter) {
  struct Logger {
    name: &'static str,
  }

  impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
      metadata.level() <= log::max_level() && !metadata.target().starts_with("rustls")
    }

    fn log(&self, record: &Record) {
      if self.enabled(record.metadata()) {
        #[cfg(feature = "utclogs")]
        let now = chrono::Utc::now();
        #[cfg(not(feature = "utclogs"))]
        let now = chrono::Local::now();
        print!("{} {} ", now.format("%Y-%m-%d %H:%M:%S%.3f"), self.name);
        #[cfg(debug_assertions)]
        {
          if let Some(path) = record.module_path() {
            print!("{path}");
          }
          if let Some(line) = record.line() {
            print!(":{line}");
          }
          print!(" ");
        }
        match record.level() {
          Level::Trace => print!("[\x1b[36mTRACE\x1b[0m]"),
          Level::Debug => print!("[\x1b[34mDEBUG\x1b[0m]"),
          Level::Info => print!("[\x1b[32mINFO\x1b[0m]"),
          Level::Warn => print!("[\x1b[33mWARN\x1b[0m]"),
          Level::Error => print!("[\x1b[31m\x1b[1mERROR\x1b[0m]"),
        }
        println!(" {}", record.args());
      }
    }

    fn flush(&self) {}
  }

  if log::set_boxed_logger(Box::new(Logger { name })).is_ok() {
    log::set_max_level(level);
    debug!("logger initialized at {level}");
  }
}
