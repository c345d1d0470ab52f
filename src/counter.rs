use crate::models::ListingRecord;
use std::collections::{BTreeMap, BTreeSet};

pub fn count_skills(batch: &[ListingRecord]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for listing in batch {
        let distinct: BTreeSet<&str> = listing.skills.iter().map(String::as_str).collect();
        for skill in distinct {
            *counts.entry(skill.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
