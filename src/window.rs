use crate::errors::StoreError;
use crate::models::DaySlot;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub const WINDOW_DAYS: usize = 10;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Created,
    AlreadyExists,
    CreatedAfterEviction(NaiveDate),
}

impl WindowAction {
    pub fn evicted_day(self) -> Option<NaiveDate> {
        match self {
            Self::CreatedAfterEviction(day) => Some(day),
            _ => None,
        }
    }
}

pub fn slot_key(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

pub fn parse_slot_key(key: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(key, DATE_FORMAT).map_err(|_| StoreError::SchemaConflict {
        slot: key.to_string(),
    })
}

pub fn ensure_slot(
    days: &mut BTreeMap<String, DaySlot>,
    day: NaiveDate,
) -> Result<WindowAction, StoreError> {
    let key = slot_key(day);
    if days.contains_key(&key) {
        return Ok(WindowAction::AlreadyExists);
    }

    let mut evicted = None;
    if days.len() >= WINDOW_DAYS {
        let mut oldest: Option<(NaiveDate, String)> = None;
        for stored in days.keys() {
            let parsed = parse_slot_key(stored)?;
            if oldest.as_ref().is_none_or(|(date, _)| parsed < *date) {
                oldest = Some((parsed, stored.clone()));
            }
        }
        if let Some((date, stored)) = oldest {
            days.remove(&stored);
            evicted = Some(date);
        }
    }

    days.insert(key, DaySlot::new());
    Ok(match evicted {
        Some(date) => WindowAction::CreatedAfterEviction(date),
        None => WindowAction::Created,
    })
}
