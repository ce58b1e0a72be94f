// Tue Jan 20 2026 - Alex

use crate::config::Config;

// Coarsening policy: which countries count as domestic, and which domestic
// carriers survive the coarse table.
#[derive(Debug, Clone)]
pub struct GeoPolicy {
    domestic_marker: String,
    recognized_carriers: Vec<String>,
}

impl GeoPolicy {
    // Placeholder for province and ISP on non-domestic leaves.
    pub const PLACEHOLDER: &'static str = "0";

    pub fn new(domestic_marker: String, recognized_carriers: Vec<String>) -> Self {
        Self {
            domestic_marker,
            recognized_carriers,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.domestic_marker.clone(),
            config.recognized_carriers.clone(),
        )
    }

    // Substring match, so regional variants containing the marker also count.
    pub fn is_domestic(&self, country: &str) -> bool {
        country.contains(&self.domestic_marker)
    }

    pub fn is_recognized_carrier(&self, isp: &str) -> bool {
        self.recognized_carriers.iter().any(|c| c == isp)
    }
}

impl Default for GeoPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_is_substring_match() {
        let policy = GeoPolicy::default();

        assert!(policy.is_domestic("中国"));
        assert!(policy.is_domestic("中国香港"));
        assert!(!policy.is_domestic("美国"));
        assert!(!policy.is_domestic("US"));
    }

    #[test]
    fn test_carrier_is_exact_match() {
        let policy = GeoPolicy::default();

        assert!(policy.is_recognized_carrier("电信"));
        assert!(policy.is_recognized_carrier("移动"));
        assert!(policy.is_recognized_carrier("联通"));
        assert!(!policy.is_recognized_carrier("长城宽带"));
        assert!(!policy.is_recognized_carrier("电信通"));
    }

    #[test]
    fn test_custom_marker() {
        let policy = GeoPolicy::new("China".to_string(), vec!["Telecom".to_string()]);

        assert!(policy.is_domestic("China Mainland"));
        assert!(!policy.is_domestic("中国"));
        assert!(policy.is_recognized_carrier("Telecom"));
    }
}
