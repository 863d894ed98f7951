//! Application Config
//!
//! Startup settings, overridable from the page URL: `?storage=<key>&log=<level>`.

use log::LevelFilter;
use percent_encoding::percent_decode_str;
use todo_core::SNAPSHOT_KEY;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the snapshot
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: SNAPSHOT_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read overrides from `window.location.search`
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Unknown keys and unparseable values are ignored
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")));

        for (key, raw_value) in pairs {
            let Ok(value) = percent_decode_str(raw_value).decode_utf8() else {
                continue;
            };
            match key {
                "storage" if !value.trim().is_empty() => config.storage_key = value.trim().to_string(),
                "log" => {
                    if let Ok(level) = value.parse::<LevelFilter>() {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }
        config
    }
}
