//! Wage and probation configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the agreed wage is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageType {
    /// Won per hour worked.
    Hourly,
    /// Won per month, weekly-holiday pay included.
    Monthly,
}

/// The agreed wage.
///
/// Amounts are whole won. Allowances are added on top of every pay figure
/// and are never discounted or multiplied.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::models::{WageConfig, WageType};
/// use rust_decimal::Decimal;
///
/// let wage = WageConfig::hourly(Decimal::from(10030)).with_allowances(Decimal::from(100_000));
/// assert_eq!(wage.wage_type, WageType::Hourly);
/// assert_eq!(wage.allowances, Decimal::from(100_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageConfig {
    /// Hourly or monthly.
    pub wage_type: WageType,
    /// The wage amount in won.
    pub amount: Decimal,
    /// Fixed monthly allowances in won.
    #[serde(default)]
    pub allowances: Decimal,
}

impl WageConfig {
    /// An hourly wage without allowances.
    pub fn hourly(amount: Decimal) -> Self {
        Self {
            wage_type: WageType::Hourly,
            amount,
            allowances: Decimal::ZERO,
        }
    }

    /// A monthly wage without allowances.
    pub fn monthly(amount: Decimal) -> Self {
        Self {
            wage_type: WageType::Monthly,
            amount,
            allowances: Decimal::ZERO,
        }
    }

    /// Sets the fixed monthly allowances.
    pub fn with_allowances(mut self, allowances: Decimal) -> Self {
        self.allowances = allowances;
        self
    }
}

/// Permitted probation discounts.
///
/// Serialized as the bare percentage (`10`, `15`, ...); other values are
/// rejected on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ProbationDiscount {
    /// 10%.
    Ten,
    /// 15%.
    Fifteen,
    /// 20%.
    Twenty,
    /// 25%.
    TwentyFive,
    /// 30%.
    Thirty,
}

impl ProbationDiscount {
    /// The discount as a whole percentage.
    pub fn percent(self) -> u8 {
        match self {
            ProbationDiscount::Ten => 10,
            ProbationDiscount::Fifteen => 15,
            ProbationDiscount::Twenty => 20,
            ProbationDiscount::TwentyFive => 25,
            ProbationDiscount::Thirty => 30,
        }
    }

    /// The discount as a fraction (0.3 for 30%).
    pub fn rate(self) -> Decimal {
        Decimal::new(i64::from(self.percent()), 2)
    }
}

impl TryFrom<u8> for ProbationDiscount {
    type Error = EngineError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        match percent {
            10 => Ok(ProbationDiscount::Ten),
            15 => Ok(ProbationDiscount::Fifteen),
            20 => Ok(ProbationDiscount::Twenty),
            25 => Ok(ProbationDiscount::TwentyFive),
            30 => Ok(ProbationDiscount::Thirty),
            _ => Err(EngineError::InvalidProbationDiscount { percent }),
        }
    }
}

impl From<ProbationDiscount> for u8 {
    fn from(discount: ProbationDiscount) -> Self {
        discount.percent()
    }
}

/// Probation settings for a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbationConfig {
    /// The requested discount.
    pub discount: ProbationDiscount,
    /// Whether the contract allows a probation discount at all. Decided by
    /// the caller from the contract length.
    pub applicable: bool,
}
