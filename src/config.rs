//! API Base Configuration
//!
//! One base URL resolved at startup and injected into the API client.

use wasm_bindgen::JsValue;

/// Fallback when no `window.API_BASE` override is set
pub const DEFAULT_API_BASE: &str = "http://localhost:8787";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config, normalizing away trailing slashes
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve the base URL once at startup.
    ///
    /// A deployment can set `window.API_BASE` before the WASM bundle loads;
    /// otherwise the compiled default is used.
    pub fn resolve() -> Self {
        let override_base = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("API_BASE")).ok())
            .and_then(|v| v.as_string());
        Self::new(override_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slashes() {
        assert_eq!(ApiConfig::new("http://localhost:8787/").base_url, "http://localhost:8787");
        assert_eq!(ApiConfig::new("http://localhost:8787//").base_url, "http://localhost:8787");
        assert_eq!(ApiConfig::new("https://example.dev").base_url, "https://example.dev");
    }
}
