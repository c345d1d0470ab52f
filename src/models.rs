use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Backend,
    Frontend,
    Android,
    Ios,
    Other,
}

impl Category {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Backend,
            2 => Self::Frontend,
            4 => Self::Android,
            16 => Self::Ios,
            _ => Self::Other,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(code) = value.parse::<u32>() {
            return Some(Self::from_code(code));
        }
        match value {
            "backend" => Some(Self::Backend),
            "frontend" => Some(Self::Frontend),
            "android" => Some(Self::Android),
            "ios" => Some(Self::Ios),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub link: String,
    pub company: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredListing {
    pub title: String,
    pub link: String,
    pub company: String,
    pub skills: Vec<String>,
    pub category: Category,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillStat {
    pub count: u64,
    pub frequency: f64,
}

pub type DaySlot = BTreeMap<String, SkillStat>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    pub frequencies: BTreeMap<String, BTreeMap<String, DaySlot>>,
    pub listings: BTreeMap<String, BTreeMap<String, StoredListing>>,
}

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub category: Category,
    pub date: String,
    pub listings: Vec<ListingRecord>,
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub category: Category,
    pub date: String,
    pub listing_count: usize,
    pub distinct_skills: usize,
    pub total_mentions: u64,
    pub evicted_day: Option<String>,
    pub retained_days: usize,
}

#[derive(Debug, Serialize)]
pub struct FrequencyRow {
    pub skill: String,
    pub count: u64,
    pub frequency: f64,
}

#[derive(Debug, Serialize)]
pub struct DayFrequenciesResponse {
    pub category: Category,
    pub date: String,
    pub total_mentions: u64,
    pub skills: Vec<FrequencyRow>,
}

#[derive(Debug, Serialize)]
pub struct ListingRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub link: String,
    pub company: String,
    pub skills: Vec<String>,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct WindowResponse {
    pub category: Category,
    pub days: Vec<String>,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_match_the_job_board() {
        assert_eq!(Category::from_code(1), Category::Backend);
        assert_eq!(Category::from_code(2), Category::Frontend);
        assert_eq!(Category::from_code(4), Category::Android);
        assert_eq!(Category::from_code(16), Category::Ios);
        assert_eq!(Category::from_code(7), Category::Other);
    }

    #[test]
    fn category_parse_accepts_names_and_codes() {
        assert_eq!(Category::parse("backend"), Some(Category::Backend));
        assert_eq!(Category::parse("16"), Some(Category::Ios));
        assert_eq!(Category::parse(" ios "), Some(Category::Ios));
        assert_eq!(Category::parse("devops"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Ios).unwrap(), "\"ios\"");
        let parsed: Category = serde_json::from_str("\"frontend\"").unwrap();
        assert_eq!(parsed, Category::Frontend);
    }
}
