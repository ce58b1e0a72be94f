// Thu Jan 22 2026 - Alex

use crate::config::Config;
use crate::output::{JsonEmitter, RunStatistics, TextEmitter};
use crate::record::LineParser;
use crate::table::{CoarseTable, GeoPolicy, RawTable};
use crate::utils::ScopedTimer;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub total_lines: u64,
    pub malformed_lines: u64,
    pub valid_records: u64,
}

// Single-shot batch run: ingest the whole input, derive the coarse table,
// then write the three sinks. Each phase completes before the next starts.
pub struct Pipeline {
    config: Config,
    policy: GeoPolicy,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let policy = GeoPolicy::from_config(&config);
        Self { config, policy }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ingest_file(&self) -> Result<(RawTable, IngestReport)> {
        let file = File::open(&self.config.input_file).with_context(|| {
            format!("failed to open input file {}", self.config.input_file.display())
        })?;
        self.ingest(BufReader::new(file))
    }

    pub fn ingest<R: BufRead>(&self, reader: R) -> Result<(RawTable, IngestReport)> {
        let _timer = ScopedTimer::new("ingest");
        let mut table = RawTable::new(self.config.sample_cap);
        let mut parser = LineParser::new();
        let mut total_lines = 0u64;

        for line in reader.lines() {
            let line = line.context("failed to read input line")?;
            total_lines += 1;

            if let Some(record) = parser.parse(&line) {
                table.insert(record);
            }
        }

        let report = IngestReport {
            total_lines,
            malformed_lines: parser.malformed_count(),
            valid_records: total_lines - parser.malformed_count(),
        };

        log::debug!(
            "ingested {} lines into {} raw leaves",
            report.total_lines,
            table.leaf_count()
        );
        if report.malformed_lines > 0 {
            log::warn!("skipped {} malformed lines", report.malformed_lines);
        }

        Ok((table, report))
    }

    pub fn coarsen(&self, raw: &RawTable) -> CoarseTable {
        let _timer = ScopedTimer::new("coarsen");
        let coarse = CoarseTable::derive(raw, &self.policy);
        log::debug!(
            "coarsened {} raw leaves into {} leaves",
            raw.leaf_count(),
            coarse.leaf_count()
        );
        coarse
    }

    pub fn write_outputs(&self, raw: &RawTable, coarse: &CoarseTable) -> Result<()> {
        let _timer = ScopedTimer::new("write_outputs");
        let text = TextEmitter::new();

        text.write_to_path(&self.config.raw_output, raw.leaves())
            .with_context(|| {
                format!("failed to write {}", self.config.raw_output.display())
            })?;

        text.write_to_path(&self.config.coarse_output, coarse.leaves())
            .with_context(|| {
                format!("failed to write {}", self.config.coarse_output.display())
            })?;

        let json = JsonEmitter::new();
        let records = json.records(coarse);
        json.write_to_path(&self.config.json_output, &records)
            .with_context(|| {
                format!("failed to write {}", self.config.json_output.display())
            })?;

        Ok(())
    }

    pub fn run(&self) -> Result<RunStatistics> {
        let start = Instant::now();

        let (raw, report) = self.ingest_file()?;
        let coarse = self.coarsen(&raw);
        self.write_outputs(&raw, &coarse)?;

        Ok(RunStatistics {
            total_lines: report.total_lines,
            malformed_lines: report.malformed_lines,
            valid_records: report.valid_records,
            raw_leaves: raw.leaf_count(),
            coarse_leaves: coarse.leaf_count(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        })
    }
}
