use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use placepicker_core::entities::{Coordinate, GeolocationError};
use placepicker_gateways::geolocation::StaticGeolocation;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "placepicker.toml";

const ENV_NAME_CACHE_DIR: &str = "PLACEPICKER_CACHE_DIR";

pub struct Config {
    pub map: Map,
    pub cache: Cache,
    pub geolocation: Geolocation,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(dir) = env::var(ENV_NAME_CACHE_DIR) {
            cfg.cache.override_dir(&dir);
        }
        Ok(cfg)
    }
}

pub struct Map {
    pub zoom: u8,
    /// Initial position if no location has been cached yet.
    pub default_position: Coordinate,
}

pub struct Cache {
    pub storage_key: String,
    /// File system directory of the JSON file store.
    pub dir: Option<PathBuf>,
}

impl Cache {
    /// Empty values are ignored.
    fn override_dir(&mut self, dir: &str) {
        let dir = dir.trim();
        if dir.is_empty() {
            log::debug!("Ignore empty {ENV_NAME_CACHE_DIR}");
            return;
        }
        self.dir = Some(dir.into());
    }
}

pub struct Geolocation {
    pub probe: StaticGeolocation,
    pub timeout: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            map,
            cache,
            geolocation,
        } = from;

        let raw::Map {
            zoom,
            default_position,
        } = map.unwrap_or_default();
        let default_position = Coordinate::from(default_position);
        if !default_position.is_finite() {
            return Err(anyhow!("Invalid default position {default_position}"));
        }
        let map = Map {
            zoom,
            default_position,
        };

        let raw::Cache { storage_key, dir } = cache.unwrap_or_default();
        if storage_key.is_empty() {
            return Err(anyhow!("Missing storage key"));
        }
        let cache = Cache { storage_key, dir };

        let raw::Geolocation {
            probe,
            position,
            timeout,
        } = geolocation.unwrap_or_default();
        let probe = match probe {
            raw::Probe::Fixed => {
                let pos = position
                    .map(Coordinate::from)
                    .ok_or_else(|| anyhow!("Missing position of the 'fixed' geolocation probe"))?;
                StaticGeolocation::Fixed(pos)
            }
            raw::Probe::Unavailable => {
                StaticGeolocation::Failing(GeolocationError::PositionUnavailable)
            }
            raw::Probe::Unsupported => StaticGeolocation::Failing(GeolocationError::Unsupported),
        };
        let geolocation = Geolocation { probe, timeout };

        Ok(Self {
            map,
            cache,
            geolocation,
        })
    }
}
