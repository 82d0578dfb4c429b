//! Runtime settings for the controller.
//!
//! Pages may override the defaults through `data-*` attributes on `<body>`:
//!
//! - `data-api-base`: prefix prepended to every `/api/...` path (default: same origin).
//! - `data-toast-ms`: how long a toast stays visible.
//! - `data-redirect-ms`: delay before following up to another page after a success.
//!
//! The config is installed once during boot and read everywhere through [`current`].

use std::sync::OnceLock;

use common::requests::Endpoint;

static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub toast_duration_ms: u32,
    pub redirect_delay_ms: u32,
    pub user_key: &'static str,
    pub theme_key: &'static str,
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub container_id: &'static str,
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: &'static str,
    pub attribution: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_duration_ms: 3000,
            redirect_delay_ms: 1500,
            user_key: "sns_user",
            theme_key: "sns_theme",
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map",
            center: (12.9716, 77.5946),
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            attribution: "&copy; OpenStreetMap contributors",
        }
    }
}

impl Config {
    /// Builds a config from attribute lookups, keeping defaults for anything
    /// missing or malformed.
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(base) = attr("data-api-base") {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(ms) = attr("data-toast-ms").and_then(|v| v.trim().parse::<u32>().ok()) {
            if ms > 0 {
                config.toast_duration_ms = ms;
            }
        }
        if let Some(ms) = attr("data-redirect-ms").and_then(|v| v.trim().parse::<u32>().ok()) {
            config.redirect_delay_ms = ms;
        }
        config
    }

    /// Reads overrides from the current document's `<body>`.
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Config::from_attributes(|name| body.get_attribute(name)),
            None => Config::default(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.api_base, endpoint.path())
    }
}

/// Installs the config for the lifetime of the page. Later calls are ignored.
pub fn install(config: Config) {
    if CONFIG.set(config).is_err() {
        gloo_console::warn!("config already installed; keeping the first one");
    }
}

pub fn current() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
