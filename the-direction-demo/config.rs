//! Demo configuration and on-disk locations.

use std::{
  borrow::Cow,
  path::{
    Path,
    PathBuf,
  },
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use eyre::{
  Result,
  WrapErr,
};
use serde::Deserialize;
use the_direction::Direction;

const APP_DIR: &str = "the-direction";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Direction the host screen starts in, before the add-on is loaded.
  pub direction:  Option<Direction>,
  /// Lines kept in the screen's scrollback.
  pub scrollback: usize,
  pub samples:    SamplesConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      direction:  None,
      scrollback: 1000,
      samples:    SamplesConfig::default(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplesConfig {
  pub ltr:   Option<Vec<String>>,
  pub rtl:   Option<Vec<String>>,
  pub mixed: Option<Vec<String>>,
}

impl Config {
  pub fn from_toml(source: &str) -> Result<Self> {
    toml::from_str(source).wrap_err("failed to parse demo config")
  }

  /// Load `specified`, or the default config file if there is one.
  ///
  /// A missing default file yields the defaults; a missing file that was
  /// asked for explicitly is an error.
  pub fn load(specified: Option<&Path>) -> Result<Self> {
    let path = match specified {
      Some(path) => Cow::Borrowed(path),
      None => {
        let path = default_config_file()?;
        if !path.exists() {
          log::debug!("no config at {}, using defaults", path.display());
          return Ok(Self::default());
        }
        Cow::Owned(path)
      },
    };

    let source = std::fs::read_to_string(&path)
      .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let config =
      Self::from_toml(&source).wrap_err_with(|| format!("in {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
  }
}

pub fn config_dir() -> Result<PathBuf> {
  if let Ok(dir) = std::env::var("THE_DIRECTION_CONFIG_DIR") {
    return Ok(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().wrap_err("unable to find the config directory")?;
  Ok(strategy.config_dir().join(APP_DIR))
}

pub fn cache_dir() -> Result<PathBuf> {
  let strategy = choose_base_strategy().wrap_err("unable to find the cache directory")?;
  Ok(strategy.cache_dir().join(APP_DIR))
}

pub fn default_config_file() -> Result<PathBuf> {
  Ok(config_dir()?.join("demo.toml"))
}

pub fn default_log_file() -> Result<PathBuf> {
  Ok(cache_dir()?.join("the-direction.log"))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    std::fs::create_dir_all(parent)
      .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
  }
  Ok(())
}
