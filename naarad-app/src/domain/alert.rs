use super::CategoryKey;
use chrono::{DateTime, NaiveTime, Utc};
use naarad_errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateFrequency {
    #[serde(rename = "Real-time")]
    RealTime,
    #[serde(rename = "Hourly")]
    Hourly,
    #[default]
    #[serde(rename = "Daily Digest")]
    DailyDigest,
    #[serde(rename = "Weekly Summary")]
    WeeklySummary,
    #[serde(rename = "Custom")]
    Custom,
}

impl UpdateFrequency {
    pub const ALL: [UpdateFrequency; 5] = [
        UpdateFrequency::RealTime,
        UpdateFrequency::Hourly,
        UpdateFrequency::DailyDigest,
        UpdateFrequency::WeeklySummary,
        UpdateFrequency::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RealTime => "Real-time",
            Self::Hourly => "Hourly",
            Self::DailyDigest => "Daily Digest",
            Self::WeeklySummary => "Weekly Summary",
            Self::Custom => "Custom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }
}

impl fmt::Display for UpdateFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpAnswer {
    #[serde(default)]
    pub selected_predefined_tags: Vec<String>,
    #[serde(default)]
    pub custom_answer_via_other: Option<String>,
}

impl FollowUpAnswer {
    /// Selected labels followed by `Other: <text>` when a custom answer was typed.
    pub fn parts(&self) -> Vec<String> {
        let mut parts = self.selected_predefined_tags.clone();
        if let Some(custom) = trimmed(self.custom_answer_via_other.as_deref()) {
            parts.push(format!("Other: {custom}"));
        }
        parts
    }

    pub fn is_answered(&self) -> bool {
        !self.selected_predefined_tags.is_empty()
            || trimmed(self.custom_answer_via_other.as_deref()).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpecificPreferences {
    #[serde(default)]
    pub selected_tags: Vec<String>,
    /// Free-text sport name; only the sports category reads it.
    #[serde(default)]
    pub other_sport_name: Option<String>,
    #[serde(default)]
    pub follow_up_answers: BTreeMap<String, FollowUpAnswer>,
    #[serde(default)]
    pub instruction_tags: Vec<String>,
}

impl CategorySpecificPreferences {
    pub fn select_tag(&mut self, tag_id: &str) {
        if !self.selected_tags.iter().any(|t| t == tag_id) {
            self.selected_tags.push(tag_id.to_string());
        }
    }

    pub fn other_sport(&self) -> Option<&str> {
        trimmed(self.other_sport_name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: uuid::Uuid,
    pub name: String,
    #[serde(default)]
    pub sports: CategorySpecificPreferences,
    #[serde(rename = "moviesTV", default)]
    pub movies_tv: CategorySpecificPreferences,
    #[serde(default)]
    pub news: CategorySpecificPreferences,
    #[serde(default)]
    pub youtube: CategorySpecificPreferences,
    #[serde(default)]
    pub custom_interest_tags: Vec<String>,
    #[serde(default)]
    pub frequency: UpdateFrequency,
    #[serde(default)]
    pub custom_frequency_time: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            sports: CategorySpecificPreferences::default(),
            movies_tv: CategorySpecificPreferences::default(),
            news: CategorySpecificPreferences::default(),
            youtube: CategorySpecificPreferences::default(),
            custom_interest_tags: Vec::new(),
            frequency: UpdateFrequency::default(),
            custom_frequency_time: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn preferences(&self, key: CategoryKey) -> &CategorySpecificPreferences {
        match key {
            CategoryKey::Sports => &self.sports,
            CategoryKey::MoviesTv => &self.movies_tv,
            CategoryKey::News => &self.news,
            CategoryKey::Youtube => &self.youtube,
        }
    }

    pub fn preferences_mut(&mut self, key: CategoryKey) -> &mut CategorySpecificPreferences {
        match key {
            CategoryKey::Sports => &mut self.sports,
            CategoryKey::MoviesTv => &mut self.movies_tv,
            CategoryKey::News => &mut self.news,
            CategoryKey::Youtube => &mut self.youtube,
        }
    }

    /// `Daily Digest`, or `Custom at 14:30` when a custom time applies.
    pub fn frequency_line(&self) -> String {
        match (self.frequency, trimmed(self.custom_frequency_time.as_deref())) {
            (UpdateFrequency::Custom, Some(time)) => {
                format!("{} at {}", self.frequency, time)
            }
            _ => self.frequency.to_string(),
        }
    }

    pub fn set_frequency(
        &mut self,
        frequency: UpdateFrequency,
        custom_time: Option<&str>,
    ) -> Result<(), AppError> {
        if frequency != UpdateFrequency::Custom {
            self.frequency = frequency;
            self.custom_frequency_time = None;
            return Ok(());
        }

        let time = trimmed(custom_time).ok_or(AppError::MissingCustomTime)?;
        let parsed = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| AppError::InvalidCustomTime(time.to_string()))?;

        self.frequency = frequency;
        self.custom_frequency_time = Some(parsed.format("%H:%M").to_string());
        Ok(())
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
