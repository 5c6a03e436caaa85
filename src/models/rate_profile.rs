//! Employee rate profile.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{STANDARD_HOURS_PER_DAY, derive_hourly_rate, standard_hourly_rate};
use crate::error::{EngineError, EngineResult};

/// The pay basis of an employee: a daily rate, the length of a paid day, and
/// the hourly rate derived from the two.
///
/// The hourly rate cannot be set on its own. It is recomputed whenever the
/// daily rate changes, and deserializing a profile only reads `daily_rate`
/// and `hours_per_day`.
///
/// # Example
///
/// ```
/// use site_payroll_engine::models::RateProfile;
/// use rust_decimal::Decimal;
///
/// let mut rate = RateProfile::new(Decimal::from(800));
/// assert_eq!(rate.hourly_rate(), Decimal::from(100));
///
/// rate.set_daily_rate(Decimal::from(960)).unwrap();
/// assert_eq!(rate.hourly_rate(), Decimal::from(120));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateProfileFields")]
pub struct RateProfile {
    daily_rate: Decimal,
    hourly_rate: Decimal,
    hours_per_day: Decimal,
}

#[derive(Deserialize)]
struct RateProfileFields {
    #[serde(default)]
    daily_rate: Decimal,
    #[serde(default = "standard_hours")]
    hours_per_day: Decimal,
}

fn standard_hours() -> Decimal {
    STANDARD_HOURS_PER_DAY
}

impl TryFrom<RateProfileFields> for RateProfile {
    type Error = EngineError;

    fn try_from(fields: RateProfileFields) -> EngineResult<Self> {
        RateProfile::with_hours_per_day(fields.daily_rate, fields.hours_per_day)
    }
}

impl Default for RateProfile {
    fn default() -> Self {
        RateProfile::new(Decimal::ZERO)
    }
}

impl RateProfile {
    /// Creates a profile for a standard eight-hour day.
    pub fn new(daily_rate: Decimal) -> Self {
        Self {
            daily_rate,
            hourly_rate: standard_hourly_rate(daily_rate),
            hours_per_day: STANDARD_HOURS_PER_DAY,
        }
    }

    /// Creates a profile whose hourly rate is based on a custom day length.
    ///
    /// Fails if `hours_per_day` is not positive or the hourly rate does not
    /// fit in a decimal.
    pub fn with_hours_per_day(daily_rate: Decimal, hours_per_day: Decimal) -> EngineResult<Self> {
        Ok(Self {
            daily_rate,
            hourly_rate: derive_hourly_rate(daily_rate, hours_per_day)?,
            hours_per_day,
        })
    }

    /// Returns the daily rate.
    pub fn daily_rate(&self) -> Decimal {
        self.daily_rate
    }

    /// Returns the hourly rate, rounded to cents.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the number of paid hours the daily rate covers.
    pub fn hours_per_day(&self) -> Decimal {
        self.hours_per_day
    }

    /// Replaces the daily rate and recomputes the hourly rate.
    ///
    /// On error the profile is left unchanged.
    pub fn set_daily_rate(&mut self, daily_rate: Decimal) -> EngineResult<()> {
        self.hourly_rate = derive_hourly_rate(daily_rate, self.hours_per_day)?;
        self.daily_rate = daily_rate;
        Ok(())
    }
}
