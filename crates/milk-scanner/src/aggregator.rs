use crate::report::ReportSection;
use milk_core::{CandidateNumber, Tier};
use std::collections::{BTreeMap, BTreeSet};

/// Collects matched numbers per tier over a whole scan.
#[derive(Debug, Default)]
pub struct Aggregator {
    buckets: BTreeMap<Tier, Vec<CandidateNumber>>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tier: Tier, candidate: CandidateNumber) {
        self.buckets.entry(tier).or_default().push(candidate);
    }

    /// Deduplicate and sort each bucket.
    ///
    /// Sections come out in report order; tiers without matches are left out.
    #[must_use]
    pub fn finalize(self) -> Vec<ReportSection> {
        let mut buckets = self.buckets;
        Tier::ALL
            .into_iter()
            .filter_map(|tier| {
                let unique: BTreeSet<CandidateNumber> =
                    buckets.remove(&tier)?.into_iter().collect();
                if unique.is_empty() {
                    return None;
                }
                Some(ReportSection {
                    tier,
                    numbers: unique.into_iter().collect(),
                })
            })
            .collect()
    }
}
