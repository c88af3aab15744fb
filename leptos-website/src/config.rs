// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime configuration.
//!
//! A deployment may define `window.__APP_CONFIG` before the bundle loads.
//! Every key is optional; a missing object means "use the defaults".

use acme_types::SiteContent;
use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::errors::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Replaces the bundled copy for every section. Kept undecoded so a
    /// broken override cannot take the rest of the config down with it.
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

impl RuntimeConfig {
    pub fn log_level(&self) -> LevelFilter {
        parse_log_level(self.log_level.as_deref())
    }
}

pub fn app_config() -> Result<RuntimeConfig, ConfigError> {
    let Some(win) = web_sys::window() else {
        return Ok(RuntimeConfig::default());
    };
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(RuntimeConfig::default());
    }
    serde_wasm_bindgen::from_value::<RuntimeConfig>(config)
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

pub fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// The content to render: a valid override from config, else the bundled copy.
pub fn site_content(config: &RuntimeConfig) -> Result<SiteContent, ConfigError> {
    if let Some(raw) = &config.content {
        match SiteContent::from_value(raw.clone()) {
            Ok(content) => return Ok(content),
            Err(e) => log::error!("ignoring content from __APP_CONFIG: {e}"),
        }
    }
    Ok(SiteContent::bundled()?)
}
