#[macro_use]
extern crate log;

use sv_data::{Config, Error, Generator};

fn main() {
  sv_common::init("data");
  match run() {
    Ok(_) => (),
    Err(e) => {
      error!("error: {}", e);
      std::process::exit(1);
    }
  };
}

fn run() -> Result<(), Error> {
  let config = Config::load("data-config.toml", "data-config-example.toml")?;
  let summary = Generator::new(&config)?.run()?;
  info!(
    "done: {} entries, {} skipped, {} conflicts",
    summary.entries, summary.skipped, summary.conflicts
  );
  Ok(())
}
