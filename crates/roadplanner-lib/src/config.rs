//! Travel settings for departure planning.

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::{Error, Result};

/// Average driving speed used when no override is given (km/h).
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 60.0;

/// Hour at which daylight driving may begin.
pub const DEFAULT_DAY_START_HOUR: u32 = 6;

/// Hour by which arrival should happen.
pub const DEFAULT_DAY_END_HOUR: u32 = 18;

/// Driving speed and daylight window used to plan departures.
///
/// Fields are private so every instance has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelConfig {
    average_speed_kmh: f64,
    day_start_hour: u32,
    day_end_hour: u32,
}

impl TravelConfig {
    /// Create a validated configuration.
    ///
    /// The speed must be finite and positive; both hours must lie in `0..=23`.
    pub fn new(average_speed_kmh: f64, day_start_hour: u32, day_end_hour: u32) -> Result<Self> {
        if !average_speed_kmh.is_finite() || average_speed_kmh <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!("average speed must be positive, got {average_speed_kmh}"),
            });
        }
        for (label, hour) in [("day start", day_start_hour), ("day end", day_end_hour)] {
            if hour > 23 {
                return Err(Error::InvalidConfig {
                    message: format!("{label} hour must be between 0 and 23, got {hour}"),
                });
            }
        }

        Ok(Self {
            average_speed_kmh,
            day_start_hour,
            day_end_hour,
        })
    }

    pub fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    pub fn day_start_hour(&self) -> u32 {
        self.day_start_hour
    }

    pub fn day_end_hour(&self) -> u32 {
        self.day_end_hour
    }

    pub(crate) fn day_start(&self) -> NaiveTime {
        hour_of_day(self.day_start_hour)
    }

    pub(crate) fn day_end(&self) -> NaiveTime {
        hour_of_day(self.day_end_hour)
    }
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
        }
    }
}

// Hours are validated on construction, so the fallback is unreachable.
fn hour_of_day(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}
