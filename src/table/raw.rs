// Tue Jan 20 2026 - Alex

use super::bucket::SampleBucket;
use super::{count_leaves, iter_leaves, CountryMap, Leaf};
use crate::record::Record;

// Fine-grained grouping built in one pass over the input:
// country -> province -> ISP -> first two range-start samples seen.
#[derive(Debug, Clone)]
pub struct RawTable {
    entries: CountryMap,
    sample_cap: usize,
}

impl RawTable {
    pub fn new(sample_cap: usize) -> Self {
        Self {
            entries: CountryMap::new(),
            sample_cap,
        }
    }

    pub fn insert(&mut self, record: Record) {
        let Record {
            range_start,
            country,
            province,
            isp,
        } = record;

        let bucket = self
            .entries
            .entry(country)
            .or_default()
            .entry(province)
            .or_default()
            .entry(isp)
            .or_insert_with(SampleBucket::new);

        bucket.try_push(range_start, self.sample_cap);
    }

    pub fn get(&self, country: &str, province: &str, isp: &str) -> Option<&SampleBucket> {
        self.entries.get(country)?.get(province)?.get(isp)
    }

    pub fn leaves(&self) -> impl Iterator<Item = Leaf<'_>> {
        iter_leaves(&self.entries)
    }

    pub fn leaf_count(&self) -> usize {
        count_leaves(&self.entries)
    }

    pub fn country_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sample_cap(&self) -> usize {
        self.sample_cap
    }
}

impl Default for RawTable {
    fn default() -> Self {
        Self::new(2)
    }
}
