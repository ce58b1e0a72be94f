// Tue Jan 20 2026 - Alex

// A representative sample of range-start addresses for one grouping key.
// Capacity is positional: once a bucket reaches the cap, later pushes are
// ignored. Duplicate addresses are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleBucket {
    samples: Vec<String>,
}

impl SampleBucket {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn from_samples(samples: Vec<String>) -> Self {
        Self { samples }
    }

    pub fn try_push(&mut self, sample: String, cap: usize) -> bool {
        if self.samples.len() >= cap {
            return false;
        }
        self.samples.push(sample);
        true
    }

    // Appends every incoming sample as long as the bucket is still under the
    // cap before the append. The combined result is not re-trimmed: absorbing
    // two samples into a one-sample bucket yields three.
    pub fn absorb(&mut self, samples: &[String], cap: usize) -> bool {
        if self.samples.len() >= cap {
            return false;
        }
        self.samples.extend(samples.iter().cloned());
        true
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_cap() {
        let mut bucket = SampleBucket::new();
        assert!(bucket.is_empty());

        assert!(bucket.try_push("1.0.0.0".to_string(), 2));
        assert!(bucket.try_push("2.0.0.0".to_string(), 2));
        assert!(!bucket.try_push("3.0.0.0".to_string(), 2));

        assert_eq!(bucket.samples(), ["1.0.0.0", "2.0.0.0"]);
    }

    #[test]
    fn test_duplicates_occupy_both_slots() {
        let mut bucket = SampleBucket::new();

        assert!(bucket.try_push("1.0.0.0".to_string(), 2));
        assert!(bucket.try_push("1.0.0.0".to_string(), 2));

        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket.samples(), ["1.0.0.0", "1.0.0.0"]);
    }

    #[test]
    fn test_absorb_into_empty_bucket() {
        let mut bucket = SampleBucket::new();
        let incoming = vec!["1.0.0.0".to_string(), "2.0.0.0".to_string()];

        assert!(bucket.absorb(&incoming, 2));
        assert_eq!(bucket.samples(), ["1.0.0.0", "2.0.0.0"]);
    }

    #[test]
    fn test_absorb_ignored_at_cap() {
        let mut bucket = SampleBucket::from_samples(vec![
            "1.0.0.0".to_string(),
            "2.0.0.0".to_string(),
        ]);

        assert!(!bucket.absorb(&["3.0.0.0".to_string()], 2));
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn test_absorb_can_overflow_cap() {
        let mut bucket = SampleBucket::from_samples(vec!["1.0.0.0".to_string()]);
        let incoming = vec!["2.0.0.0".to_string(), "3.0.0.0".to_string()];

        assert!(bucket.absorb(&incoming, 2));
        assert_eq!(bucket.len(), 3);
        assert_eq!(bucket.samples(), ["1.0.0.0", "2.0.0.0", "3.0.0.0"]);
    }
}
