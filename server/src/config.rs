use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub wishes_file: String,
    pub reservations_file: String,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            port: try_load("WISHLIST_PORT", "5000")?,
            data_dir: try_load("WISHLIST_DATA_DIR", "/data")?,
            wishes_file: try_load("WISHLIST_WISHES_FILE", "wishes.private.json")?,
            reservations_file: try_load("WISHLIST_RESERVATIONS_FILE", "reservations.json")?,
            static_dir: try_load("WISHLIST_STATIC_DIR", ".")?,
        })
    }

    pub fn wishes_path(&self) -> PathBuf {
        self.data_dir.join(&self.wishes_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, String>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            format!("invalid {key}: {e}")
        })
}
