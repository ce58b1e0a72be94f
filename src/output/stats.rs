// Wed Jan 21 2026 - Alex

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStatistics {
    pub total_lines: u64,
    pub malformed_lines: u64,
    pub valid_records: u64,
    pub raw_leaves: usize,
    pub coarse_leaves: usize,
    pub elapsed_ms: u64,
}

impl RunStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Lines read: {} ({} malformed, {} valid)\nRaw leaves: {}\nCoarse leaves: {}\nElapsed: {}ms",
            self.total_lines,
            self.malformed_lines,
            self.valid_records,
            self.raw_leaves,
            self.coarse_leaves,
            self.elapsed_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_counts() {
        let stats = RunStatistics {
            total_lines: 10,
            malformed_lines: 2,
            valid_records: 8,
            raw_leaves: 5,
            coarse_leaves: 3,
            elapsed_ms: 12,
        };

        let summary = stats.summary();
        assert!(summary.contains("2 malformed"));
        assert!(summary.contains("Raw leaves: 5"));
        assert!(summary.contains("Coarse leaves: 3"));
    }
}
