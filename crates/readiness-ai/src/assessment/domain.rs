use std::collections::BTreeMap;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

use super::roi::RoiInputs;

/// Highest rating a survey question accepts; answers above it are clamped.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Automation,
    Data,
    People,
    Risk,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [Self::Automation, Self::Data, Self::People, Self::Risk]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Automation => "Automation Potential",
            Self::Data => "Data Readiness",
            Self::People => "Change Readiness",
            Self::Risk => "Risk & Governance",
        }
    }

    /// Share of this category in the blended overall score. The four shares
    /// sum to 1.0.
    pub const fn blend_weight(self) -> f32 {
        match self {
            Self::Automation => 0.35,
            Self::Data => 0.30,
            Self::People => 0.20,
            Self::Risk => 0.15,
        }
    }
}

/// Service line an initiative maps to in the Illuminate portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pillar {
    DataConnect,
    Insight360,
    PredictIQ,
    #[serde(rename = "Cyber+")]
    CyberPlus,
    #[serde(rename = "vCISO")]
    VCiso,
    SafeGuard,
    CoreIT,
}

impl Pillar {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DataConnect => "DataConnect",
            Self::Insight360 => "Insight360",
            Self::PredictIQ => "PredictIQ",
            Self::CyberPlus => "Cyber+",
            Self::VCiso => "vCISO",
            Self::SafeGuard => "SafeGuard",
            Self::CoreIT => "CoreIT",
        }
    }
}

/// Ratings keyed by question id. Unanswered questions rate 0; out-of-range
/// values clamp to `MAX_RATING` at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<String, u8>);

impl AnswerSheet {
    pub fn set(&mut self, question_id: impl Into<String>, rating: u8) {
        self.0.insert(question_id.into(), rating.min(MAX_RATING));
    }

    pub fn rating(&self, question_id: &str) -> u8 {
        self.0.get(question_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for AnswerSheet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, i64>::deserialize(deserializer)?;
        let ratings = raw
            .into_iter()
            .map(|(id, rating)| (id, rating.clamp(0, MAX_RATING as i64) as u8))
            .collect();
        Ok(Self(ratings))
    }
}

/// Persisted form state: the answer sheet plus contact and sizing fields the
/// survey collects alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentSnapshot {
    pub answers: AnswerSheet,
    pub company: String,
    pub email: String,
    #[serde(deserialize_with = "blankable_u32")]
    pub team_size: Option<u32>,
    #[serde(deserialize_with = "blankable_f32")]
    pub hours_per_person_week: Option<f32>,
    #[serde(deserialize_with = "blankable_f32")]
    pub hourly_rate: Option<f32>,
    pub subscribe: bool,
    pub note: String,
}

impl AssessmentSnapshot {
    pub fn roi_inputs(&self) -> RoiInputs {
        RoiInputs {
            team_size: self.team_size,
            hours_per_person_week: self.hours_per_person_week,
            hourly_rate: self.hourly_rate,
        }
    }
}

impl Default for AssessmentSnapshot {
    fn default() -> Self {
        Self {
            answers: AnswerSheet::default(),
            company: String::new(),
            email: String::new(),
            team_size: None,
            hours_per_person_week: None,
            hourly_rate: None,
            subscribe: true,
            note: String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericField<T> {
    Number(T),
    Text(String),
}

// Browser builds of the survey persist cleared numeric inputs as "".
fn blankable_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumericField<u32>>::deserialize(deserializer)? {
        Some(NumericField::Number(value)) => Ok(Some(value)),
        Some(NumericField::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumericField::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| DeError::custom(format!("expected a number, got '{text}'"))),
        None => Ok(None),
    }
}

fn blankable_f32<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumericField<f32>>::deserialize(deserializer)? {
        Some(NumericField::Number(value)) => Ok(Some(value)),
        Some(NumericField::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumericField::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| DeError::custom(format!("expected a number, got '{text}'"))),
        None => Ok(None),
    }
}
