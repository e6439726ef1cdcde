use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Result};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "rounds.toml";

const ENV_NAME_DATA_FILE: &str = "ROUNDS_DATA";

// Tile servers do not offer anything beyond this.
const MAX_ZOOM: u8 = 22;

pub struct Config {
    pub store: Store,
    pub geocoding: Geocoding,
    pub map: Map,
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
        if let Ok(data_file) = env::var(ENV_NAME_DATA_FILE) {
            cfg.store.data_file = data_file.into();
        }
        Ok(cfg)
    }
}

pub struct Store {
    /// TOML file that keeps clients, appointments, the mileage log and
    /// the saved route preferences.
    pub data_file: PathBuf,
}

pub struct Geocoding {
    /// Nominatim-compatible search endpoint.
    pub endpoint: String,
    pub request_timeout: Duration,
    /// Pause between consecutive lookups.
    pub lookup_spacing: Duration,
}

pub struct Map {
    /// Initial zoom level of the rendered route.
    pub zoom: u8,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            store,
            geocoding,
            map,
        } = from;

        let raw::Store { data_file } = store.unwrap_or_default();

        let store = Store { data_file };

        let raw::Geocoding {
            endpoint,
            request_timeout,
            lookup_spacing,
        } = geocoding.unwrap_or_default();

        if endpoint.trim().is_empty() {
            return Err(anyhow!("Missing geocoding endpoint"));
        }
        if request_timeout.is_zero() {
            return Err(anyhow!("The geocoding request timeout must not be zero"));
        }
        let geocoding = Geocoding {
            endpoint,
            request_timeout,
            lookup_spacing,
        };

        let raw::Map { zoom } = map.unwrap_or_default();

        if zoom > MAX_ZOOM {
            return Err(anyhow!("The map zoom level must not exceed {MAX_ZOOM}"));
        }
        let map = Map { zoom };

        Ok(Self {
            store,
            geocoding,
            map,
        })
    }
}
