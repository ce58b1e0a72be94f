// Tue Jan 20 2026 - Alex

pub mod bucket;
pub mod policy;
pub mod raw;
pub mod coarse;

pub use bucket::SampleBucket;
pub use policy::GeoPolicy;
pub use raw::RawTable;
pub use coarse::CoarseTable;

use indexmap::IndexMap;

// Three-level grouping shared by both tables. IndexMap keeps first-seen
// insertion order at every level, which fixes the output file sequencing.
pub(crate) type IspMap = IndexMap<String, SampleBucket>;
pub(crate) type ProvinceMap = IndexMap<String, IspMap>;
pub(crate) type CountryMap = IndexMap<String, ProvinceMap>;

#[derive(Debug, Clone, Copy)]
pub struct Leaf<'a> {
    pub country: &'a str,
    pub province: &'a str,
    pub isp: &'a str,
    pub samples: &'a [String],
}

pub(crate) fn iter_leaves(map: &CountryMap) -> impl Iterator<Item = Leaf<'_>> {
    map.iter().flat_map(|(country, provinces)| {
        provinces.iter().flat_map(move |(province, isps)| {
            isps.iter().map(move |(isp, bucket)| Leaf {
                country: country.as_str(),
                province: province.as_str(),
                isp: isp.as_str(),
                samples: bucket.samples(),
            })
        })
    })
}

pub(crate) fn count_leaves(map: &CountryMap) -> usize {
    map.values()
        .flat_map(|provinces| provinces.values())
        .map(|isps| isps.len())
        .sum()
}
