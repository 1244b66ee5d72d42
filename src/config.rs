//! Build-time Configuration
//!
//! A static frontend has no runtime environment, so settings are baked in
//! with `option_env!` when the bundle is built.

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";
/// Catalog prices are quoted in USD, the checklist tracks rupiah
pub const DEFAULT_EXCHANGE_RATE: f64 = 15000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for the `/items` endpoints
    pub api_base: String,
    /// Product feed URL
    pub catalog_url: String,
    /// Multiplier applied to catalog prices on import
    pub exchange_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CHECKLIST_API_BASE"),
            option_env!("CHECKLIST_CATALOG_URL"),
            option_env!("CHECKLIST_EXCHANGE_RATE"),
        )
    }

    fn from_values(api_base: Option<&str>, catalog_url: Option<&str>, exchange_rate: Option<&str>) -> Self {
        let defaults = Self::default();
        let exchange_rate = match exchange_rate.map(|raw| raw.trim().parse::<f64>()) {
            Some(Ok(rate)) if rate.is_finite() && rate > 0.0 => rate,
            Some(_) => {
                log::warn!("ignoring invalid CHECKLIST_EXCHANGE_RATE, using {}", defaults.exchange_rate);
                defaults.exchange_rate
            }
            None => defaults.exchange_rate,
        };
        Self {
            api_base: api_base
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            catalog_url: catalog_url
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.catalog_url),
            exchange_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(AppConfig::from_values(None, None, None), AppConfig::default());
    }

    #[test]
    fn trailing_slash_is_trimmed_from_api_base() {
        let config = AppConfig::from_values(Some("https://example.test/api/"), None, None);
        assert_eq!(config.api_base, "https://example.test/api");
    }

    #[test]
    fn bad_exchange_rate_falls_back() {
        assert_eq!(AppConfig::from_values(None, None, Some("abc")).exchange_rate, DEFAULT_EXCHANGE_RATE);
        assert_eq!(AppConfig::from_values(None, None, Some("-2")).exchange_rate, DEFAULT_EXCHANGE_RATE);
        assert_eq!(AppConfig::from_values(None, None, Some("16000")).exchange_rate, 16000.0);
    }
}
