// Mon Jan 19 2026 - Alex

pub mod parser;

pub use parser::{LineParser, FIELD_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub range_start: String,
    pub country: String,
    pub province: String,
    pub isp: String,
}

impl Record {
    pub fn new(range_start: &str, country: &str, province: &str, isp: &str) -> Self {
        Self {
            range_start: range_start.to_string(),
            country: country.to_string(),
            province: province.to_string(),
            isp: isp.to_string(),
        }
    }
}
