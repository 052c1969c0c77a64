use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "https://api.genderize.io/";
pub const DEFAULT_STORE_PATH: &str = "namecast-store.json";

pub struct Config {
    pub api_url: String,
    pub store_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_url: try_load("NAMECAST_API_URL", DEFAULT_API_URL),
            store_path: try_load("NAMECAST_STORE_PATH", DEFAULT_STORE_PATH),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
