// Mon Jan 19 2026 - Alex

use super::Record;

pub const FIELD_COUNT: usize = 7;

const RANGE_START_FIELD: usize = 0;
const COUNTRY_FIELD: usize = 2;
const PROVINCE_FIELD: usize = 4;
const ISP_FIELD: usize = 6;

// Splits pipe-delimited geolocation lines. Lines that do not produce exactly
// seven fields are counted and dropped, never reported as errors.
pub struct LineParser {
    malformed: u64,
}

impl LineParser {
    pub fn new() -> Self {
        Self { malformed: 0 }
    }

    pub fn parse(&mut self, line: &str) -> Option<Record> {
        let fields: Vec<&str> = line.trim().split('|').collect();

        if fields.len() != FIELD_COUNT {
            self.malformed += 1;
            return None;
        }

        Some(Record::new(
            fields[RANGE_START_FIELD],
            fields[COUNTRY_FIELD],
            fields[PROVINCE_FIELD],
            fields[ISP_FIELD],
        ))
    }

    pub fn malformed_count(&self) -> u64 {
        self.malformed
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
