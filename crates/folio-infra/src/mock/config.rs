use chrono::{DateTime, TimeZone, Utc};

/// Seed for post and author data.
pub const DEFAULT_SEED: u64 = 123;
/// Seed for static page copy. Kept apart from `DEFAULT_SEED` so that the
/// number of generated posts never changes page copy.
pub const DEFAULT_PAGE_SEED: u64 = 456;
pub const DEFAULT_POST_COUNT: usize = 25;
pub const DEFAULT_SPAN_DAYS: u32 = 730;

/// Mock store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConfig {
    pub seed: u64,
    pub page_seed: u64,
    pub post_count: usize,
    /// Latest possible publication instant. Posts fall in
    /// `(anchor - span_days, anchor]`.
    pub anchor: DateTime<Utc>,
    pub span_days: u32,
    /// Locales to build page copy for.
    pub locales: Vec<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            page_seed: DEFAULT_PAGE_SEED,
            post_count: DEFAULT_POST_COUNT,
            anchor: default_anchor(),
            span_days: DEFAULT_SPAN_DAYS,
            locales: vec!["en".to_string(), "fr".to_string()],
        }
    }
}

impl MockConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            seed: std::env::var("MOCK_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            page_seed: std::env::var("MOCK_PAGE_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.page_seed),
            post_count: std::env::var("MOCK_POST_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.post_count),
            anchor: std::env::var("MOCK_ANCHOR")
                .ok()
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or(defaults.anchor),
            span_days: std::env::var("MOCK_SPAN_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|days| *days > 0)
                .unwrap_or(defaults.span_days),
            locales: std::env::var("MOCK_LOCALES")
                .ok()
                .map(|s| parse_locales(&s))
                .filter(|l| !l.is_empty())
                .unwrap_or(defaults.locales),
        }
    }

    pub fn with_post_count(mut self, post_count: usize) -> Self {
        self.post_count = post_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

fn default_anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Parse a comma-separated locale list such as `en, fr`.
fn parse_locales(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MockConfig::default();
        assert_eq!(config.seed, 123);
        assert_ne!(config.seed, config.page_seed);
        assert_eq!(config.post_count, 25);
        assert_eq!(config.locales, vec!["en", "fr"]);
    }

    #[test]
    fn test_parse_locales() {
        assert_eq!(parse_locales(" EN, fr ,,"), vec!["en", "fr"]);
        assert!(parse_locales(" , ").is_empty());
    }
}
