// Tue Jan 20 2026 - Alex

use super::bucket::SampleBucket;
use super::policy::GeoPolicy;
use super::raw::RawTable;
use super::{count_leaves, iter_leaves, CountryMap, Leaf};

// Coarsened grouping derived from a RawTable. Non-domestic countries collapse
// to a single ("0", "0") leaf per country; domestic leaves keep their province
// and are filtered to the recognized carriers.
#[derive(Debug, Clone)]
pub struct CoarseTable {
    entries: CountryMap,
    sample_cap: usize,
}

impl CoarseTable {
    pub fn derive(raw: &RawTable, policy: &GeoPolicy) -> Self {
        let mut table = Self {
            entries: CountryMap::new(),
            sample_cap: raw.sample_cap(),
        };

        for leaf in raw.leaves() {
            table.merge_leaf(leaf, policy);
        }

        table
    }

    fn merge_leaf(&mut self, leaf: Leaf<'_>, policy: &GeoPolicy) {
        let (province, isp) = if policy.is_domestic(leaf.country) {
            // Domestic leaves with an unrecognized carrier are dropped
            // outright, not merged into a placeholder.
            if !policy.is_recognized_carrier(leaf.isp) {
                return;
            }
            (leaf.province, leaf.isp)
        } else {
            (GeoPolicy::PLACEHOLDER, GeoPolicy::PLACEHOLDER)
        };

        let bucket = self
            .entries
            .entry(leaf.country.to_string())
            .or_default()
            .entry(province.to_string())
            .or_default()
            .entry(isp.to_string())
            .or_insert_with(SampleBucket::new);

        // A bucket under the cap absorbs the whole incoming leaf without
        // re-trimming, so one merge can leave it holding three samples.
        bucket.absorb(leaf.samples, self.sample_cap);
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

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
