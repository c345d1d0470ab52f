use crate::counter::count_skills;
use crate::errors::StoreError;
use crate::models::{AppData, Category, DaySlot, ListingRecord, ListingRow, SkillStat, StoredListing};
use crate::stats::refresh_frequencies;
use crate::window::{self, WindowAction};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct IngestOutcome {
    pub action: WindowAction,
    pub listing_count: usize,
    pub distinct_skills: usize,
    pub total_mentions: u64,
    pub retained_days: usize,
}

pub fn ingest_batch(
    data: &mut AppData,
    category: Category,
    day: NaiveDate,
    batch: &[ListingRecord],
) -> Result<IngestOutcome, StoreError> {
    let ids = validate_batch(category, day, batch)?;
    let counts = count_skills(batch);
    let distinct_skills = counts.len();
    let total_mentions = counts.values().sum();

    let days = data
        .frequencies
        .entry(category.as_str().to_string())
        .or_default();
    let action = window::ensure_slot(days, day)?;
    upsert_day(days, day, &counts);
    let retained_days = days.len();

    for (id, listing) in ids.into_iter().zip(batch) {
        upsert_listing(data, day, id, category, listing);
    }

    Ok(IngestOutcome {
        action,
        listing_count: batch.len(),
        distinct_skills,
        total_mentions,
        retained_days,
    })
}

pub fn upsert_day(
    days: &mut BTreeMap<String, DaySlot>,
    day: NaiveDate,
    counts: &BTreeMap<String, u64>,
) {
    let slot = days.entry(window::slot_key(day)).or_default();
    slot.clear();
    for (skill, &count) in counts {
        slot.insert(
            skill.clone(),
            SkillStat {
                count,
                frequency: 0.0,
            },
        );
    }
    refresh_frequencies(slot);
}

pub fn read_day<'a>(data: &'a AppData, category: Category, day: NaiveDate) -> Option<&'a DaySlot> {
    data.frequencies
        .get(category.as_str())
        .and_then(|days| days.get(&window::slot_key(day)))
}

pub fn totals_for(data: &AppData, category: Category, day: NaiveDate) -> u64 {
    read_day(data, category, day)
        .map(|slot| slot.values().map(|stat| stat.count).sum())
        .unwrap_or(0)
}

pub fn retained_days(data: &AppData, category: Category) -> Vec<String> {
    data.frequencies
        .get(category.as_str())
        .map(|days| days.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn upsert_listing(
    data: &mut AppData,
    day: NaiveDate,
    id: String,
    category: Category,
    listing: &ListingRecord,
) {
    let stored = StoredListing {
        title: listing.title.clone(),
        link: listing.link.clone(),
        company: listing.company.clone(),
        skills: listing.skills.clone(),
        category,
    };
    data.listings
        .entry(window::slot_key(day))
        .or_default()
        .insert(id, stored);
}

pub fn read_listings_range(
    data: &AppData,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<ListingRow>, StoreError> {
    if from > to {
        return Err(StoreError::Validation(format!(
            "range start {from} is after range end {to}"
        )));
    }

    let mut rows = Vec::new();
    for (date, listings) in data
        .listings
        .range(window::slot_key(from)..=window::slot_key(to))
    {
        for (id, stored) in listings {
            rows.push(ListingRow {
                id: id.clone(),
                date: date.clone(),
                title: stored.title.clone(),
                link: stored.link.clone(),
                company: stored.company.clone(),
                skills: stored.skills.clone(),
                category: stored.category,
            });
        }
    }
    Ok(rows)
}

pub fn id_from_link(link: &str) -> Option<&str> {
    link.rsplit('/').find(|segment| !segment.is_empty())
}

fn validate_batch(
    category: Category,
    day: NaiveDate,
    batch: &[ListingRecord],
) -> Result<Vec<String>, StoreError> {
    let day_key = window::slot_key(day);
    let mut ids = Vec::with_capacity(batch.len());

    for listing in batch {
        if let Some(listed) = listing.category {
            if listed != category {
                return Err(StoreError::Validation(format!(
                    "listing '{}' is categorized {} but the batch is {}",
                    listing.title,
                    listed.as_str(),
                    category.as_str()
                )));
            }
        }
        if let Some(date) = &listing.date {
            if *date != day_key {
                return Err(StoreError::Validation(format!(
                    "listing '{}' is dated {date} but the batch is {day_key}",
                    listing.title
                )));
            }
        }
        if listing.skills.iter().any(|skill| skill.trim().is_empty()) {
            return Err(StoreError::Validation(format!(
                "listing '{}' has an empty skill name",
                listing.title
            )));
        }

        let id = match listing.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => id_from_link(&listing.link)
                .ok_or_else(|| {
                    StoreError::Validation(format!(
                        "listing '{}' has neither an id nor a link to derive one from",
                        listing.title
                    ))
                })?
                .to_string(),
        };
        ids.push(id);
    }

    Ok(ids)
}
