use crate::{ConfigError, Error, FetchError, DEFAULT_OUTPUT, ITEM_CATALOG_URL};
use serde::Deserialize;
use std::{
  fmt, fs,
  io::Read,
  path::{Path, PathBuf},
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub sources: SourcesMode,

  pub url:    Option<String>,
  pub path:   Option<PathBuf>,
  pub output: Option<PathBuf>,

  // The file this was read from, if any.
  #[serde(skip)]
  file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SourcesMode {
  #[serde(rename = "local")]
  Local,
  #[default]
  #[serde(rename = "remote")]
  Remote,
}

/// Where the item catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
  Remote(String),
  Local(PathBuf),
}

impl Config {
  /// Reads `path` if it exists, then `example_path`. If neither exists, this
  /// returns the default config, which downloads from RePoE.
  pub fn load(path: impl AsRef<Path>, example_path: impl AsRef<Path>) -> Result<Self, Error> {
    for p in [path.as_ref(), example_path.as_ref()] {
      if p.exists() {
        debug!("loading config from {}", p.display());
        return Config::from_file(p);
      }
    }
    debug!("no config file found, using defaults");
    Ok(Config::default())
  }

  /// A config that reads the catalog from a json file at `path`.
  pub fn local(path: impl Into<PathBuf>) -> Self {
    Config { sources: SourcesMode::Local, path: Some(path.into()), ..Default::default() }
  }

  pub fn from_file(path: &Path) -> Result<Self, Error> {
    let err = |err: ConfigError| Error::Config { path: path.display().to_string(), err };
    let src = fs::read_to_string(path).map_err(|e| err(e.into()))?;
    let config: Config = toml::from_str(&src).map_err(|e| err(e.into()))?;
    Ok(Config { file: Some(path.to_path_buf()), ..config })
  }

  /// Names where this config came from, for error messages.
  pub fn origin(&self) -> String {
    match &self.file {
      Some(file) => file.display().to_string(),
      None => "<default config>".into(),
    }
  }

  pub fn source(&self) -> Result<Source, Error> {
    match self.sources {
      SourcesMode::Remote => {
        Ok(Source::Remote(self.url.clone().unwrap_or_else(|| ITEM_CATALOG_URL.into())))
      }
      SourcesMode::Local => match &self.path {
        Some(path) => Ok(Source::Local(path.clone())),
        None => Err(Error::Config { path: self.origin(), err: ConfigError::MissingPath }),
      },
    }
  }

  pub fn output(&self) -> PathBuf {
    self.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
  }
}

impl fmt::Display for Source {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Source::Remote(url) => write!(f, "{url}"),
      Source::Local(path) => write!(f, "{}", path.display()),
    }
  }
}

pub struct Downloader {
  source: Source,
}

impl Downloader {
  pub fn new(source: Source) -> Self { Downloader { source } }

  pub fn source(&self) -> &Source { &self.source }

  /// Returns the raw catalog body. This makes exactly one request for remote
  /// sources, and never retries.
  pub fn fetch(&self) -> Result<String, Error> {
    let err = |err: FetchError| Error::Fetch { from: self.source.to_string(), err };
    match &self.source {
      Source::Remote(url) => {
        info!("downloading item catalog from {url}");
        // ureq treats any non 2xx status as an error.
        let res = ureq::get(url).call().map_err(|e| err(Box::new(e).into()))?;
        let mut body = String::new();
        // `into_string` caps the body at 10MB, which the catalog gets close to.
        res.into_reader().read_to_string(&mut body).map_err(|e| err(e.into()))?;
        Ok(body)
      }
      Source::Local(path) => {
        info!("reading item catalog from {}", path.display());
        fs::read_to_string(path).map_err(|e| err(e.into()))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_config() {
    let config: Config = toml::from_str(
      r#"
      sources = "local"
      path = "base_items.json"
      output = "out/items.rs"
      "#,
    )
    .unwrap();
    assert_eq!(config.source().unwrap(), Source::Local("base_items.json".into()));
    assert_eq!(config.output(), PathBuf::from("out/items.rs"));
  }

  #[test]
  fn defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.sources, SourcesMode::Remote);
    assert_eq!(config.source().unwrap(), Source::Remote(ITEM_CATALOG_URL.into()));
    assert_eq!(config.output(), PathBuf::from(DEFAULT_OUTPUT));
  }

  #[test]
  fn local_needs_path() {
    let config: Config = toml::from_str(r#"sources = "local""#).unwrap();
    assert!(matches!(
      config.source(),
      Err(Error::Config { err: ConfigError::MissingPath, .. })
    ));
  }

  #[test]
  fn errors_name_the_config_file() {
    let dir = std::env::temp_dir().join(format!("sv_data_dl_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("data-config.toml");
    fs::write(&file, r#"sources = "local""#).unwrap();

    let config = Config::load(&file, "does-not-exist.toml").unwrap();
    assert_eq!(config.origin(), file.display().to_string());
    match config.source() {
      Err(e @ Error::Config { err: ConfigError::MissingPath, .. }) => assert_eq!(
        e.to_string(),
        format!(
          "could not load config `{}`: `path` must be present for local sources",
          file.display()
        )
      ),
      other => panic!("expected a config error, got {other:?}"),
    }
    fs::remove_dir_all(&dir).unwrap();

    let config = Config { sources: SourcesMode::Local, ..Default::default() };
    match config.source() {
      Err(Error::Config { path, .. }) => assert_eq!(path, "<default config>"),
      other => panic!("expected a config error, got {other:?}"),
    }
  }

  #[test]
  fn missing_config_files() {
    let config = Config::load("does-not-exist.toml", "does-not-exist-either.toml").unwrap();
    assert_eq!(config.source().unwrap(), Source::Remote(ITEM_CATALOG_URL.into()));
  }

  #[test]
  fn missing_local_file() {
    let dl = Downloader::new(Source::Local("does-not-exist.json".into()));
    match dl.fetch() {
      Err(Error::Fetch { from, err: FetchError::Io(_) }) => assert_eq!(from, "does-not-exist.json"),
      other => panic!("expected a fetch error, got {other:?}"),
    }
  }
}
