//! Departure planning against a daylight arrival window.
//!
//! The planner aims for arrival at the configured end-of-day hour and works
//! backwards from there using a continuous-driving estimate. Two overrides
//! then adjust the suggestion:
//!
//! 1. journeys of twelve hours or more whose departure would fall before the
//!    day start are moved to today's day start;
//! 2. any suggestion that is already in the past moves to tomorrow's day start.
//!
//! The second rule is applied after the first, so an overnight correction that
//! lands before `now` is replaced by tomorrow's start.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::config::TravelConfig;

/// Journeys at least this long are candidates for the overnight override.
const OVERNIGHT_THRESHOLD_HOURS: f64 = 12.0;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Suggested departure and the driving time it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeparturePlan {
    pub suggested_departure: NaiveDateTime,
    pub total_travel_hours: f64,
}

/// Derive total travel hours and a departure time for a journey of
/// `total_distance_km`, given the current local time `now`.
pub fn plan_departure(
    total_distance_km: f64,
    now: NaiveDateTime,
    config: &TravelConfig,
) -> DeparturePlan {
    let total_travel_hours = total_distance_km / config.average_speed_kmh();

    let today = now.date();
    let target_arrival = today.and_time(config.day_end());
    let travel = Duration::microseconds((total_travel_hours * MICROS_PER_HOUR).round() as i64);
    // Out-of-range results are clamped to the earliest instant; the past-time rule then applies.
    let mut suggested_departure = target_arrival
        .checked_sub_signed(travel)
        .unwrap_or(NaiveDateTime::MIN);

    if total_travel_hours >= OVERNIGHT_THRESHOLD_HOURS
        && suggested_departure.hour() < config.day_start_hour()
    {
        suggested_departure = today.and_time(config.day_start());
    }

    if suggested_departure < now {
        let tomorrow = today.succ_opt().unwrap_or(today);
        suggested_departure = tomorrow.and_time(config.day_start());
    }

    DeparturePlan {
        suggested_departure,
        total_travel_hours,
    }
}
