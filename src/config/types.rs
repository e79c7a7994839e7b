//! Configuration types for the legal regime.
//!
//! A [`LaborRegime`] bundles every jurisdiction-year constant the rules
//! read: minimum wage, average weeks per month, insurance rates, the night
//! window and the hour thresholds. Calculators take it by reference and
//! never read module-level constants, so moving to a new year means
//! loading a different bundle.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifying information about the regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// Short code (e.g., "KR-2025").
    pub code: String,
    /// Human-readable name of the regime.
    pub name: String,
    /// Reference year of the constants.
    pub year: i32,
    /// URL of the official minimum wage notice.
    pub source_url: String,
}

/// Wage constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageConstants {
    /// Statutory minimum hourly wage in won.
    pub minimum_hourly: Decimal,
    /// Statutory minimum monthly wage in won (full-time, 209 hours).
    pub minimum_monthly: Decimal,
    /// Legal reference hours in a full-time month, holiday hours included.
    pub reference_monthly_hours: Decimal,
    /// Share of the minimum wage that a probation salary may not go below.
    pub probation_floor_ratio: Decimal,
    /// Premium on the ordinary hourly wage for overtime and night work
    /// (0.5 = 50%).
    pub premium_rate: Decimal,
}

/// Working-time constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConstants {
    /// Average number of weeks per month.
    pub weeks_per_month: Decimal,
    /// Net minutes per day after which overtime starts.
    pub daily_overtime_threshold_minutes: u32,
    /// Start of the night-shift window (inclusive).
    pub night_start: NaiveTime,
    /// End of the night-shift window (exclusive).
    pub night_end: NaiveTime,
    /// Maximum weekly working hours, overtime included.
    pub weekly_hour_cap: Decimal,
    /// Maximum weekly overtime hours.
    pub weekly_overtime_cap: Decimal,
}

/// Hour thresholds for eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Weekly hours from which social insurance enrollment is mandatory.
    pub insurance_weekly_hours: Decimal,
    /// Monthly hours from which social insurance enrollment is mandatory.
    pub insurance_monthly_hours: Decimal,
    /// Weekly hours from which weekly-holiday pay is owed.
    pub weekly_holiday_min_hours: Decimal,
    /// Weekly hours at which weekly-holiday pay is no longer pro-rated.
    pub weekly_holiday_full_hours: Decimal,
    /// Hours of pay a full weekly holiday is worth.
    pub weekly_holiday_paid_hours: Decimal,
}

/// Social insurance contribution rates.
///
/// Every rate is a fraction of the insured salary (0.045 = 4.5%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceRates {
    /// National pension.
    pub national_pension: Decimal,
    /// National health insurance.
    pub health: Decimal,
    /// Long-term care insurance.
    pub long_term_care: Decimal,
    /// Employment insurance as charged on the payslip.
    pub employment: Decimal,
    /// Employment insurance as borne by the employer, stability levy included.
    pub employment_employer: Decimal,
    /// Industrial-accident compensation insurance, employer only.
    pub industrial_accident: Decimal,
}

impl InsuranceRates {
    fn named(&self) -> [(&'static str, Decimal); 6] {
        [
            ("insurance.national_pension", self.national_pension),
            ("insurance.health", self.health),
            ("insurance.long_term_care", self.long_term_care),
            ("insurance.employment", self.employment),
            ("insurance.employment_employer", self.employment_employer),
            ("insurance.industrial_accident", self.industrial_accident),
        ]
    }
}

/// Budget solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSettings {
    /// Share of the budget held back as a safety margin.
    pub safety_margin: Decimal,
}

/// The complete jurisdiction-year constant bundle.
///
/// # Example
///
/// ```
/// use labor_cost_engine::config::LaborRegime;
/// use rust_decimal::Decimal;
///
/// let regime = LaborRegime::korea_2025();
/// assert_eq!(regime.wages.minimum_hourly, Decimal::from(10030));
/// assert!(regime.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborRegime {
    /// Regime metadata.
    pub metadata: RegimeMetadata,
    /// Wage constants.
    pub wages: WageConstants,
    /// Working-time constants.
    pub time: TimeConstants,
    /// Eligibility thresholds.
    pub thresholds: Thresholds,
    /// Insurance rates.
    pub insurance: InsuranceRates,
    /// Budget solver settings.
    pub budget: BudgetSettings,
}

impl LaborRegime {
    /// Returns the built-in bundle for Korea, 2025.
    pub fn korea_2025() -> Self {
        Self {
            metadata: RegimeMetadata {
                code: "KR-2025".to_string(),
                name: "대한민국 근로기준법 2025".to_string(),
                year: 2025,
                source_url: "https://www.minimumwage.go.kr".to_string(),
            },
            wages: WageConstants {
                minimum_hourly: Decimal::from(10_030),
                minimum_monthly: Decimal::from(2_096_270),
                reference_monthly_hours: Decimal::from(209),
                probation_floor_ratio: Decimal::new(9, 1),
                premium_rate: Decimal::new(5, 1),
            },
            time: TimeConstants {
                weeks_per_month: Decimal::new(4345, 3),
                daily_overtime_threshold_minutes: 480,
                night_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
                night_end: NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default(),
                weekly_hour_cap: Decimal::from(52),
                weekly_overtime_cap: Decimal::from(12),
            },
            thresholds: Thresholds {
                insurance_weekly_hours: Decimal::from(15),
                insurance_monthly_hours: Decimal::from(60),
                weekly_holiday_min_hours: Decimal::from(15),
                weekly_holiday_full_hours: Decimal::from(40),
                weekly_holiday_paid_hours: Decimal::from(8),
            },
            insurance: InsuranceRates {
                national_pension: Decimal::new(45, 3),
                health: Decimal::new(3545, 5),
                long_term_care: Decimal::new(4591, 6),
                employment: Decimal::new(9, 3),
                employment_employer: Decimal::new(115, 4),
                industrial_accident: Decimal::new(147, 4),
            },
            budget: BudgetSettings {
                safety_margin: Decimal::new(5, 2),
            },
        }
    }

    /// Checks that every value is usable by the rules.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, rate) in self.insurance.named() {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("rate {} must be in [0, 1)", rate),
                });
            }
        }

        let positives = [
            ("wages.minimum_hourly", self.wages.minimum_hourly),
            ("wages.premium_rate", self.wages.premium_rate),
            ("wages.reference_monthly_hours", self.wages.reference_monthly_hours),
            ("time.weeks_per_month", self.time.weeks_per_month),
            (
                "thresholds.weekly_holiday_full_hours",
                self.thresholds.weekly_holiday_full_hours,
            ),
        ];
        for (field, value) in positives {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("{} must be positive", value),
                });
            }
        }

        if self.wages.probation_floor_ratio < Decimal::ZERO
            || self.wages.probation_floor_ratio > Decimal::ONE
        {
            return Err(EngineError::InvalidConfig {
                field: "wages.probation_floor_ratio".to_string(),
                message: "ratio must be in [0, 1]".to_string(),
            });
        }

        if self.budget.safety_margin < Decimal::ZERO || self.budget.safety_margin >= Decimal::ONE
        {
            return Err(EngineError::InvalidConfig {
                field: "budget.safety_margin".to_string(),
                message: "margin must be in [0, 1)".to_string(),
            });
        }

        if self.time.night_start == self.time.night_end {
            return Err(EngineError::InvalidConfig {
                field: "time.night_start".to_string(),
                message: "night window must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Night window as minutes since midnight, `(start, end)`.
    pub fn night_window_minutes(&self) -> (u32, u32) {
        (
            self.time.night_start.num_seconds_from_midnight() / 60,
            self.time.night_end.num_seconds_from_midnight() / 60,
        )
    }

    /// Returns true if the clock minute falls inside the night window.
    ///
    /// Handles windows that wrap past midnight.
    pub fn is_night_minute(&self, clock_minute: u32) -> bool {
        let (start, end) = self.night_window_minutes();
        let minute = clock_minute % 1440;
        if start < end {
            minute >= start && minute < end
        } else {
            minute >= start || minute < end
        }
    }

    /// Employer cost per won of pay for an enrolled employee: one won of pay
    /// plus the employer burden of pension, health, long-term care and
    /// employment insurance.
    pub fn employer_cost_multiplier(&self) -> Decimal {
        let rates = &self.insurance;
        Decimal::ONE
            + rates.national_pension
            + rates.health
            + rates.long_term_care
            + rates.employment_employer
    }
}

impl Default for LaborRegime {
    fn default() -> Self {
        Self::korea_2025()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_korea_2025_is_valid() {
        assert!(LaborRegime::korea_2025().validate().is_ok());
    }

    #[test]
    fn test_minimum_monthly_is_hourly_times_reference_hours() {
        let regime = LaborRegime::korea_2025();
        assert_eq!(
            regime.wages.minimum_hourly * regime.wages.reference_monthly_hours,
            regime.wages.minimum_monthly
        );
    }

    #[test]
    fn test_employer_cost_multiplier() {
        let regime = LaborRegime::korea_2025();
        assert_eq!(regime.employer_cost_multiplier(), dec("1.096541"));
    }

    #[test]
    fn test_night_window_minutes() {
        let regime = LaborRegime::korea_2025();
        assert_eq!(regime.night_window_minutes(), (1320, 360));
    }

    #[test]
    fn test_is_night_minute_wraps_midnight() {
        let regime = LaborRegime::korea_2025();
        assert!(!regime.is_night_minute(1319)); // 21:59
        assert!(regime.is_night_minute(1320)); // 22:00
        assert!(regime.is_night_minute(0));
        assert!(regime.is_night_minute(359)); // 05:59
        assert!(!regime.is_night_minute(360)); // 06:00
        assert!(regime.is_night_minute(1440 + 30)); // next day 00:30
    }

    #[test]
    fn test_is_night_minute_non_wrapping_window() {
        let mut regime = LaborRegime::korea_2025();
        regime.time.night_start = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
        regime.time.night_end = NaiveTime::from_hms_opt(5, 0, 0).unwrap();

        assert!(!regime.is_night_minute(59));
        assert!(regime.is_night_minute(60));
        assert!(!regime.is_night_minute(300));
    }

    #[test]
    fn test_validate_rejects_rate_out_of_range() {
        let mut regime = LaborRegime::korea_2025();
        regime.insurance.health = dec("1.2");

        match regime.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "insurance.health");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_night_window() {
        let mut regime = LaborRegime::korea_2025();
        regime.time.night_end = regime.time.night_start;

        assert!(matches!(
            regime.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_weeks_per_month() {
        let mut regime = LaborRegime::korea_2025();
        regime.time.weeks_per_month = Decimal::ZERO;

        match regime.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "time.weeks_per_month");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_regime_serialization_roundtrip() {
        let regime = LaborRegime::korea_2025();
        let json = serde_json::to_string(&regime).unwrap();
        assert!(json.contains("\"minimum_hourly\":\"10030\""));

        let restored: LaborRegime = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, regime);
    }
}
