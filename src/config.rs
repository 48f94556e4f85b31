//! Viewer Configuration
//!
//! Defaults plus optional overrides read from the page's query string.

use percent_encoding::percent_decode_str;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the character API (without the `/character` path)
    pub api_base_url: String,
    /// Number of characters kept after loading
    pub target_count: usize,
    pub page_size: usize,
    /// Page buttons shown on each side of the current page
    pub window_radius: usize,
    /// Pages moved by the Previous/Next buttons
    pub skip_step: usize,
    pub log_level: log::LevelFilter,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            target_count: 300,
            page_size: 10,
            window_radius: 5,
            skip_step: 5,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl ViewerConfig {
    /// Overlay `?api=..&target=..&page_size=..&log=..` onto the defaults.
    /// Unknown keys and unparseable values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(&raw.replace('+', " "))
                .decode_utf8_lossy()
                .trim()
                .to_string();

            match key {
                "api" if !value.is_empty() => {
                    config.api_base_url = value.trim_end_matches('/').to_string();
                }
                "target" => set_positive(&mut config.target_count, &value),
                "page_size" => set_positive(&mut config.page_size, &value),
                "window" => set_positive(&mut config.window_radius, &value),
                "skip" => set_positive(&mut config.skip_step, &value),
                "log" => {
                    if let Ok(level) = value.parse() {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Read overrides from `window.location.search`
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

fn set_positive(slot: &mut usize, value: &str) {
    if let Ok(n) = value.parse::<usize>() {
        if n > 0 {
            *slot = n;
        }
    }
}
