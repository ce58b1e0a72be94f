// Mon Jan 19 2026 - Alex

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input_file: PathBuf,
    pub raw_output: PathBuf,
    pub coarse_output: PathBuf,
    pub json_output: PathBuf,
    pub domestic_marker: String,
    pub recognized_carriers: Vec<String>,
    pub sample_cap: usize,
    pub enable_verbose_output: bool,
    pub enable_progress_bars: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("data/ip.txt"),
            raw_output: PathBuf::from("data/ip_country_1.txt"),
            coarse_output: PathBuf::from("data/ip_country_2.txt"),
            json_output: PathBuf::from("data/ip_country_3.json"),
            domestic_marker: "中国".to_string(),
            recognized_carriers: vec![
                "电信".to_string(),
                "移动".to_string(),
                "联通".to_string(),
            ],
            sample_cap: 2,
            enable_verbose_output: false,
            enable_progress_bars: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, input: PathBuf) -> Self {
        self.input_file = input;
        self
    }

    pub fn with_raw_output(mut self, output: PathBuf) -> Self {
        self.raw_output = output;
        self
    }

    pub fn with_coarse_output(mut self, output: PathBuf) -> Self {
        self.coarse_output = output;
        self
    }

    pub fn with_json_output(mut self, output: PathBuf) -> Self {
        self.json_output = output;
        self
    }

    pub fn with_domestic_marker(mut self, marker: String) -> Self {
        self.domestic_marker = marker;
        self
    }

    pub fn with_recognized_carriers(mut self, carriers: Vec<String>) -> Self {
        self.recognized_carriers = carriers;
        self
    }

    pub fn with_sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.sample_cap == 0 {
            return Err("sample_cap must be greater than 0".to_string());
        }
        if self.domestic_marker.is_empty() {
            return Err("domestic_marker must not be empty".to_string());
        }
        if self.recognized_carriers.is_empty() {
            return Err("recognized_carriers must not be empty".to_string());
        }
        if self.recognized_carriers.iter().any(|c| c.is_empty()) {
            return Err("recognized_carriers must not contain empty names".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_cap, 2);
        assert_eq!(config.recognized_carriers.len(), 3);
    }

    #[test]
    fn test_zero_sample_cap_rejected() {
        let config = Config::default().with_sample_cap(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let config = Config::default().with_domestic_marker(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_carrier_list_rejected() {
        let config = Config::default().with_recognized_carriers(Vec::new());
        assert!(config.validate().is_err());
    }
}
