// Mon Jan 19 2026 - Alex

pub mod config;
pub mod record;
pub mod table;
pub mod output;
pub mod pipeline;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use pipeline::Pipeline;
pub use record::LineParser;
pub use table::{CoarseTable, GeoPolicy, RawTable, SampleBucket};
pub use output::{JsonEmitter, RunStatistics, TextEmitter};
