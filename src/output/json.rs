// Wed Jan 21 2026 - Alex

use super::error::OutputError;
use super::OutputRecord;
use crate::table::CoarseTable;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Serializes the coarse table as a JSON array of OutputRecords. Output is
// UTF-8 with human-readable indentation; non-ASCII text is emitted literally,
// never \u-escaped.
pub struct JsonEmitter {
    indent_size: usize,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self { indent_size: 4 }
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    pub fn records(&self, table: &CoarseTable) -> Vec<OutputRecord> {
        table.leaves().map(OutputRecord::from_leaf).collect()
    }

    pub fn write<W: Write>(
        &self,
        records: &[OutputRecord],
        writer: &mut W,
    ) -> Result<(), OutputError> {
        let indent = vec![b' '; self.indent_size];
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut serializer = Serializer::with_formatter(writer, formatter);
        records.serialize(&mut serializer)?;
        Ok(())
    }

    pub fn serialize(&self, records: &[OutputRecord]) -> Result<String, OutputError> {
        let mut buf = Vec::new();
        self.write(records, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to_path<P: AsRef<Path>>(
        &self,
        path: P,
        records: &[OutputRecord],
    ) -> Result<(), OutputError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write(records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::table::{GeoPolicy, RawTable};

    fn coarse_fixture() -> CoarseTable {
        let mut raw = RawTable::new(2);
        raw.insert(Record::new("1.0.1.0", "中国", "福建省", "电信"));
        raw.insert(Record::new("1.0.8.0", "中国", "福建省", "电信"));
        raw.insert(Record::new("1.2.3.0", "US", "CA", "ISP_A"));
        CoarseTable::derive(&raw, &GeoPolicy::default())
    }

    #[test]
    fn test_one_record_per_leaf() {
        let coarse = coarse_fixture();
        let records = JsonEmitter::new().records(&coarse);

        assert_eq!(records.len(), coarse.leaf_count());
        assert_eq!(
            records[0],
            OutputRecord {
                country: "中国".to_string(),
                province: "福建省".to_string(),
                isp: "电信".to_string(),
                ips: vec!["1.0.1.0".to_string(), "1.0.8.0".to_string()],
            }
        );
    }

    #[test]
    fn test_non_ascii_emitted_literally() {
        let emitter = JsonEmitter::new();
        let records = emitter.records(&coarse_fixture());
        let text = emitter.serialize(&records).unwrap();

        assert!(text.contains("中国"));
        assert!(text.contains("电信"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_indentation_and_shape() {
        let emitter = JsonEmitter::new();
        let records = emitter.records(&coarse_fixture());
        let text = emitter.serialize(&records).unwrap();

        assert!(text.starts_with('['));
        assert!(text.contains("    \"country\""));
        assert!(text.contains("\"ips\""));

        let parsed: Vec<OutputRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_custom_indent_size() {
        let emitter = JsonEmitter::new().with_indent_size(2);
        let records = emitter.records(&coarse_fixture());
        let text = emitter.serialize(&records).unwrap();

        assert!(text.contains("\n  {"));
        assert!(!text.contains("\n    {"));
    }

    #[test]
    fn test_empty_table_serializes_to_empty_array() {
        let raw = RawTable::new(2);
        let coarse = CoarseTable::derive(&raw, &GeoPolicy::default());
        let emitter = JsonEmitter::new();
        let records = emitter.records(&coarse);

        assert_eq!(emitter.serialize(&records).unwrap(), "[]");
    }
}
