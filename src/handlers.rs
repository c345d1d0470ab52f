use crate::errors::AppError;
use crate::models::{
    Category, DayFrequenciesResponse, IngestRequest, IngestResponse, ListingRow, WindowResponse,
};
use crate::state::AppState;
use crate::stats::ranked_rows;
use crate::store;
use crate::window::{self, WINDOW_DAYS};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use tracing::info;

pub async fn ingest(
    State(state): State<AppState>,
    Json(payload): Json<IngestRequest>,
) -> Result<Json<IngestResponse>, AppError> {
    let day = parse_date(&payload.date)?;

    let mut data = state.data.lock().await;
    let mut staged = data.clone();
    let outcome = store::ingest_batch(&mut staged, payload.category, day, &payload.listings)?;
    state.commit(&mut data, staged).await?;

    if let Some(evicted) = outcome.action.evicted_day() {
        info!(
            "evicted {} from the {} window for {}",
            evicted,
            payload.category.as_str(),
            window::slot_key(day)
        );
    }

    Ok(Json(IngestResponse {
        category: payload.category,
        date: window::slot_key(day),
        listing_count: outcome.listing_count,
        distinct_skills: outcome.distinct_skills,
        total_mentions: outcome.total_mentions,
        evicted_day: outcome.action.evicted_day().map(window::slot_key),
        retained_days: outcome.retained_days,
    }))
}

pub async fn get_skills(
    State(state): State<AppState>,
    Path((category, date)): Path<(String, String)>,
) -> Result<Json<DayFrequenciesResponse>, AppError> {
    let category = parse_category(&category)?;
    let day = parse_date(&date)?;

    let data = state.data.lock().await;
    let skills = store::read_day(&data, category, day)
        .map(ranked_rows)
        .unwrap_or_default();

    Ok(Json(DayFrequenciesResponse {
        category,
        date: window::slot_key(day),
        total_mentions: store::totals_for(&data, category, day),
        skills,
    }))
}

pub async fn get_listings(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<Vec<ListingRow>>, AppError> {
    let from = parse_date(&from)?;
    let to = parse_date(&to)?;

    let data = state.data.lock().await;
    let rows = store::read_listings_range(&data, from, to)?;
    Ok(Json(rows))
}

pub async fn get_window(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<WindowResponse>, AppError> {
    let category = parse_category(&category)?;

    let data = state.data.lock().await;
    Ok(Json(WindowResponse {
        category,
        days: store::retained_days(&data, category),
        capacity: WINDOW_DAYS,
    }))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), window::DATE_FORMAT)
        .map_err(|_| AppError::bad_request(format!("'{value}' is not a YYYY-MM-DD date")))
}

fn parse_category(value: &str) -> Result<Category, AppError> {
    Category::parse(value)
        .ok_or_else(|| AppError::bad_request(format!("unknown category '{value}'")))
}
