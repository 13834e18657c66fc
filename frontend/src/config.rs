use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Runtime settings, read once at start-up and handed to every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix for every `/api/...` call, empty for same-origin
    pub api_base_url: String,
    /// Pins "today" for the calendar; the browser date is used when unset
    pub reference_date: Option<NaiveDate>,
    pub toast_duration_ms: u32,
    pub carousel_interval_ms: u32,
    pub reservation_redirect_ms: u32,
    pub register_redirect_ms: u32,
    pub profile_reload_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            reference_date: None,
            toast_duration_ms: 4000,
            carousel_interval_ms: 4000,
            reservation_redirect_ms: 5000,
            register_redirect_ms: 4500,
            profile_reload_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `HOTEL_API_BASE_URL` and `HOTEL_REFERENCE_DATE`
    /// captured at build time
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("HOTEL_API_BASE_URL"),
            option_env!("HOTEL_REFERENCE_DATE"),
        )
    }

    fn from_overrides(api_base_url: Option<&str>, reference_date: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = reference_date {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => config.reference_date = Some(date),
                Err(e) => log::warn!("ignoring HOTEL_REFERENCE_DATE={:?}: {}", raw, e),
            }
        }
        config
    }

    /// Calendar "today": the pinned reference date or the browser's local date
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(crate::services::date_utils::today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.carousel_interval_ms, 4000);
        assert_eq!(config.reference_date, None);
    }

    #[wasm_bindgen_test]
    fn test_overrides() {
        let config = AppConfig::from_overrides(Some("http://localhost:8080/"), Some("2026-02-26"));
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2026, 2, 26).unwrap());

        let config = AppConfig::from_overrides(None, Some("26/02/2026"));
        assert_eq!(config.reference_date, None);
    }
}
