//! Generates the item class tables used by stashvision.
//!
//! The item catalog is RePoE's `base_items.json`. Every base item with one of
//! the [`ITEM_CLASSES`] is grouped under its class, and the result is written
//! out as Rust source holding two static tables, which
//! [`sv_common::ItemClassTable`] reads at runtime.

#[macro_use]
extern crate log;

use std::{io, path::PathBuf};
use thiserror::Error;

pub mod catalog;
pub mod class;
pub mod dl;
pub mod emit;
pub mod gen;

pub use catalog::{Catalog, Entry, Skipped};
pub use class::{ClassMap, Conflict, NameIndex};
pub use dl::{Config, Downloader, Source, SourcesMode};

/// Where RePoE publishes the base item catalog.
pub const ITEM_CATALOG_URL: &str =
  "https://github.com/brather1ng/RePoE/raw/master/data/base_items.json";

/// The default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "generated/item_classes.rs";

/// Every item class that ends up in the generated tables, in the order they
/// are written.
pub static ITEM_CLASSES: &[&str] = &[
  "Amulet",
  "Belt",
  "Boots",
  "Bow",
  "Body Armour",
  "Claw",
  "Dagger",
  "Gloves",
  "Helmet",
  "One Hand Axe",
  "One Hand Mace",
  "One Hand Sword",
  "Quiver",
  "Ring",
  "Sceptre",
  "Shield",
  "Staff",
  "Two Hand Axe",
  "Two Hand Mace",
  "Two Hand Sword",
  "Wand",
  "Warstaff",
];

#[derive(Debug, Error)]
pub enum Error {
  #[error("could not fetch item catalog from `{from}`: {err}")]
  Fetch {
    from: String,
    #[source]
    err:  FetchError,
  },
  #[error("could not parse item catalog: {0}")]
  Parse(#[from] ParseError),
  #[error("could not load config `{path}`: {err}")]
  Config {
    path: String,
    #[source]
    err:  ConfigError,
  },
  #[error("could not write `{path}`: {err}")]
  Io {
    path: String,
    #[source]
    err:  io::Error,
  },
}

#[derive(Debug, Error)]
pub enum FetchError {
  #[error(transparent)]
  Http(#[from] Box<ureq::Error>),
  #[error(transparent)]
  Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ParseError {
  #[error(transparent)]
  Json(#[from] serde_json::Error),
  #[error("expected an object at the top level, got {0}")]
  NotAnObject(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Io(#[from] io::Error),
  #[error(transparent)]
  Toml(#[from] toml::de::Error),
  #[error("`path` must be present for local sources")]
  MissingPath,
}

/// What a single run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
  /// Number of records in the catalog.
  pub entries:   usize,
  /// Records that were missing fields or had a class not in the table.
  pub skipped:   usize,
  /// Number of names in the inverse table.
  pub names:     usize,
  /// Names that were listed under more than one class.
  pub conflicts: usize,
  pub output:    PathBuf,
}

/// Runs the whole pipeline: fetch, parse, group, invert, and emit.
pub struct Generator {
  dl:      Downloader,
  out:     PathBuf,
  classes: &'static [&'static str],
}

impl Generator {
  pub fn new(config: &Config) -> Result<Self, Error> {
    Ok(Generator {
      dl:      Downloader::new(config.source()?),
      out:     config.output(),
      classes: ITEM_CLASSES,
    })
  }

  /// Replaces the classes written to the tables. Mostly useful for tests.
  pub fn with_classes(mut self, classes: &'static [&'static str]) -> Self {
    self.classes = classes;
    self
  }

  pub fn run(&self) -> Result<Summary, Error> {
    let body = self.dl.fetch()?;
    let catalog = Catalog::parse(&body)?;
    info!("read {} entries from {}", catalog.len(), self.dl.source());

    let (classes, skipped) = ClassMap::group(&catalog, self.classes);
    for (class, names) in classes.iter() {
      debug!("{class}: {} names", names.len());
    }
    let index = NameIndex::build(&classes);
    for c in index.conflicts() {
      warn!("`{}` is listed under `{}` and `{}`, keeping `{}`", c.name, c.kept, c.dropped, c.kept);
    }

    let src = emit::render(&classes, &index, &self.dl.source().to_string());
    emit::write(&self.out, &src)?;
    info!("wrote {} names in {} classes to {}", index.len(), classes.len(), self.out.display());

    Ok(Summary {
      entries: catalog.len(),
      skipped,
      names: index.len(),
      conflicts: index.conflicts().len(),
      output: self.out.clone(),
    })
  }
}
