use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const ENV_GLOBAL: &str = "__WEBINAR_ENV";
const CONFIG_GLOBAL: &str = "__WEBINAR_CONFIG";
const FALLBACK_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Trims whitespace and trailing slashes; empty values are treated as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Base URL used when nothing is configured: the API mounted under the
/// page's own origin.
pub fn default_base_url(origin: Option<&str>) -> String {
    origin
        .and_then(normalize_base_url)
        .map(|origin| format!("{}/api", origin))
        .unwrap_or_else(|| FALLBACK_BASE_URL.to_string())
}

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    // Expect an optional global object, e.g. window.__WEBINAR_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .and_then(|v| v.as_string())
            .and_then(|v| normalize_base_url(&v))
    })
}

fn snapshot_from_globals() -> Option<String> {
    read_global_key(ENV_GLOBAL, &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key(CONFIG_GLOBAL, &["api_base_url", "API_BASE_URL"]))
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config(origin: &str) -> anyhow::Result<RuntimeConfig> {
    let url = format!("{}/config.json", origin);
    let resp = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .with_context(|| format!("fetching {}", url))?;
    if !resp.status().is_success() {
        return Err(anyhow!("{} returned {}", url, resp.status()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("parsing config.json")
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        log::info!("API base URL from window globals: {}", existing);
        return cache_base_url(&existing);
    }
    let origin = page_origin();
    if let Some(origin) = origin.as_deref() {
        match fetch_runtime_config(origin).await {
            Ok(cfg) => {
                if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
                    write_window_config(&url);
                    log::info!("API base URL from config.json: {}", url);
                    return cache_base_url(&url);
                }
            }
            Err(err) => log::warn!("runtime config unavailable: {:#}", err),
        }
    }
    let fallback = default_base_url(origin.as_deref());
    log::info!("API base URL defaulted to {}", fallback);
    cache_base_url(&fallback)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url("  https://webwizards.example/api/ "),
            Some("https://webwizards.example/api".to_string())
        );
        assert_eq!(
            normalize_base_url("https://webwizards.example/api//"),
            Some("https://webwizards.example/api".to_string())
        );
    }

    #[test]
    fn normalize_base_url_rejects_empty_values() {
        assert_eq!(normalize_base_url(""), None);
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn default_base_url_mounts_api_under_origin() {
        assert_eq!(
            default_base_url(Some("https://webwizards.example")),
            "https://webwizards.example/api"
        );
        assert_eq!(default_base_url(None), FALLBACK_BASE_URL);
        assert_eq!(default_base_url(Some("")), FALLBACK_BASE_URL);
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "https://api.example" }"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.example"));

        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
