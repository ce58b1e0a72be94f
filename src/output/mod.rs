// Wed Jan 21 2026 - Alex

pub mod error;
pub mod text;
pub mod json;
pub mod stats;

pub use error::OutputError;
pub use text::TextEmitter;
pub use json::JsonEmitter;
pub use stats::RunStatistics;

use crate::table::Leaf;
use serde::{Deserialize, Serialize};

// One JSON object per coarse-table leaf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRecord {
    pub country: String,
    pub province: String,
    pub isp: String,
    pub ips: Vec<String>,
}

impl OutputRecord {
    pub fn from_leaf(leaf: Leaf<'_>) -> Self {
        Self {
            country: leaf.country.to_string(),
            province: leaf.province.to_string(),
            isp: leaf.isp.to_string(),
            ips: leaf.samples.to_vec(),
        }
    }
}
