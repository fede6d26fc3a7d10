use serde::{Deserialize, Serialize};

const WEEKS_PER_MONTH: f64 = 4.3;
// At full readiness, 60% of baseline effort is addressable and 90% of that is
// realized, so the yield tops out at 54%.
const ADDRESSABLE_SHARE: f64 = 0.6;
const ADOPTION_EFFICIENCY: f64 = 0.9;

/// Sizing inputs for the monthly savings projection. The projection is only
/// available when all three are present and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub team_size: Option<u32>,
    pub hours_per_person_week: Option<f32>,
    pub hourly_rate: Option<f32>,
}

impl RoiInputs {
    pub fn available(&self) -> bool {
        self.resolve().is_some()
    }

    fn resolve(&self) -> Option<(f64, f64, f64)> {
        let team = self.team_size? as f64;
        let hours = self.hours_per_person_week? as f64;
        let rate = self.hourly_rate? as f64;

        if team < 1.0 {
            return None;
        }
        if !hours.is_finite() || hours <= 0.0 {
            return None;
        }
        if !rate.is_finite() || rate <= 0.0 {
            return None;
        }

        Some((team, hours, rate))
    }

    /// Projects monthly savings at the given overall readiness score. Cash
    /// savings are computed from the already-rounded hours figure so the two
    /// headline numbers agree.
    pub fn project(&self, overall_score: f32) -> Option<RoiProjection> {
        let (team, hours, rate) = self.resolve()?;

        let baseline = team * hours * WEEKS_PER_MONTH;
        let yield_fraction =
            (overall_score as f64 / 100.0) * ADDRESSABLE_SHARE * ADOPTION_EFFICIENCY;
        let hours_saved = (baseline * yield_fraction).round();
        let cash_saved = (hours_saved * rate).round();

        Some(RoiProjection {
            baseline_hours_per_month: baseline.round() as u32,
            automation_yield_pct: (yield_fraction * 100.0).round().clamp(0.0, 100.0) as u8,
            hours_saved_per_month: hours_saved as u32,
            cash_saved_per_month: cash_saved as u32,
        })
    }
}

/// Rounded monthly savings projection. Serialized field names follow the
/// submission wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiProjection {
    #[serde(rename = "baselineHrs")]
    pub baseline_hours_per_month: u32,
    #[serde(rename = "automationYield")]
    pub automation_yield_pct: u8,
    #[serde(rename = "hoursSaved")]
    pub hours_saved_per_month: u32,
    #[serde(rename = "cashSaved")]
    pub cash_saved_per_month: u32,
}
