mod common;

use common::{at, on};
use roadplanner_lib::{plan_departure, TravelConfig};

fn config() -> TravelConfig {
    TravelConfig::new(60.0, 6, 18).expect("valid config")
}

#[test]
fn departure_lands_arrival_at_day_end() {
    let plan = plan_departure(300.0, at(8, 0), &config());

    assert_eq!(plan.total_travel_hours, 5.0);
    assert_eq!(plan.suggested_departure, at(13, 0));
}

#[test]
fn day_long_trip_departs_tomorrow_morning() {
    // 1400 km is ~23.33 h, so the raw departure is 18:40 on the previous day.
    // Whether or not the overnight rule moves it to 06:00 today, that is
    // already behind 07:00 and the past-time rule settles on tomorrow 06:00.
    let plan = plan_departure(1400.0, at(7, 0), &config());

    assert!((plan.total_travel_hours - 70.0 / 3.0).abs() < 1e-9);
    assert_eq!(plan.suggested_departure, on(11, 6, 0));
}

#[test]
fn departure_equal_to_now_is_kept() {
    let plan = plan_departure(300.0, at(13, 0), &config());
    assert_eq!(plan.suggested_departure, at(13, 0));
}

#[test]
fn departure_one_minute_late_rolls_to_tomorrow() {
    let plan = plan_departure(300.0, at(13, 1), &config());
    assert_eq!(plan.suggested_departure, on(11, 6, 0));
}

#[test]
fn zero_distance_leaves_at_day_end() {
    let plan = plan_departure(0.0, at(9, 0), &config());
    assert_eq!(plan.total_travel_hours, 0.0);
    assert_eq!(plan.suggested_departure, at(18, 0));
}

#[test]
fn faster_speed_shortens_travel() {
    let fast = TravelConfig::new(100.0, 6, 18).expect("valid config");
    let plan = plan_departure(300.0, at(8, 0), &fast);

    assert_eq!(plan.total_travel_hours, 3.0);
    assert_eq!(plan.suggested_departure, at(15, 0));
}

#[test]
fn custom_window_moves_target_arrival() {
    let window = TravelConfig::new(60.0, 5, 20).expect("valid config");
    let plan = plan_departure(120.0, at(8, 0), &window);
    assert_eq!(plan.suggested_departure, at(18, 0));
}

#[test]
fn long_trip_overnight_override_before_day_start() {
    // 13 h trip from 00:30: raw 05:00 is before 06:00 and still ahead of now.
    let plan = plan_departure(780.0, at(0, 30), &config());
    assert_eq!(plan.suggested_departure, at(6, 0));
}

#[test]
fn overnight_correction_discarded_once_day_start_has_passed() {
    // 15 h trip: raw 03:00 becomes 06:00 today, which is behind 06:30.
    let plan = plan_departure(900.0, at(6, 30), &config());
    assert_eq!(plan.suggested_departure, on(11, 6, 0));
}
