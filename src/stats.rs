use crate::models::{DaySlot, FrequencyRow};
use std::collections::BTreeMap;

pub fn compute_percentages(counts: &BTreeMap<String, u64>) -> BTreeMap<String, f64> {
    let total: u64 = counts.values().sum();
    counts
        .iter()
        .map(|(skill, &count)| (skill.clone(), percentage(count, total)))
        .collect()
}

pub fn refresh_frequencies(slot: &mut DaySlot) {
    let total: u64 = slot.values().map(|stat| stat.count).sum();
    for stat in slot.values_mut() {
        stat.frequency = percentage(stat.count, total);
    }
}

pub fn ranked_rows(slot: &DaySlot) -> Vec<FrequencyRow> {
    let mut rows: Vec<FrequencyRow> = slot
        .iter()
        .map(|(skill, stat)| FrequencyRow {
            skill: skill.clone(),
            count: stat.count,
            frequency: stat.frequency,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    rows
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round3(count as f64 / total as f64 * 100.0)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
