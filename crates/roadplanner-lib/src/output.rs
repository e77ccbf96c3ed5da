use std::fmt::Write;

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::config::TravelConfig;
use crate::error::Result;
use crate::graph::Graph;
use crate::routing::RouteReport;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// One city along the route together with the road distance used to reach it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub city: String,
    /// Distance from the previous city; `None` for the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_km: Option<f64>,
    pub cumulative_km: f64,
}

/// Structured representation of a planned route that front ends can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub distance_km: f64,
    pub total_travel_hours: f64,
    pub average_speed_kmh: f64,
    pub suggested_departure: NaiveDateTime,
    /// Arrival target the departure was planned against.
    pub arrive_by: NaiveTime,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Convert a [`RouteReport`] into a summary, annotating legs with graph distances.
    pub fn from_report(report: &RouteReport, graph: &Graph, config: &TravelConfig) -> Self {
        let mut legs = Vec::with_capacity(report.path.len());
        let mut cumulative_km = 0.0;
        for (index, city) in report.path.iter().enumerate() {
            let leg_km = index
                .checked_sub(1)
                .and_then(|previous| graph.distance(report.path[previous].as_str(), city.as_str()));
            cumulative_km += leg_km.unwrap_or(0.0);
            legs.push(RouteLeg {
                index,
                city: city.to_string(),
                leg_km,
                cumulative_km,
            });
        }

        Self {
            start: report
                .path
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
            goal: report
                .path
                .last()
                .map(ToString::to_string)
                .unwrap_or_default(),
            hops: report.hop_count(),
            distance_km: report.distance_km,
            total_travel_hours: report.total_travel_hours,
            average_speed_kmh: config.average_speed_kmh(),
            suggested_departure: report.suggested_departure,
            arrive_by: config.day_end(),
            legs,
        }
    }

    /// Serialise the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops)",
            self.start, self.goal, self.hops
        );
        let _ = writeln!(buffer, "{}", self.joined_path(" -> "));
        let _ = writeln!(buffer, "Total distance: {:.1} km", self.distance_km);
        let _ = writeln!(
            buffer,
            "Travel time: {} at {:.0} km/h",
            format_hours(self.total_travel_hours),
            self.average_speed_kmh
        );
        let _ = writeln!(
            buffer,
            "Suggested departure: {} (to arrive by {})",
            format_departure(&self.suggested_departure),
            format_arrival(&self.arrive_by)
        );
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, {:.1} km)",
            self.start, self.goal, self.hops, self.distance_km
        );
        for leg in &self.legs {
            match leg.leg_km {
                Some(km) => {
                    let _ = writeln!(
                        buffer,
                        "* {:>2}. **{}** (+{:.1} km, {:.1} km total)",
                        leg.index, leg.city, km, leg.cumulative_km
                    );
                }
                None => {
                    let _ = writeln!(buffer, "* {:>2}. **{}**", leg.index, leg.city);
                }
            }
        }
        let _ = writeln!(
            buffer,
            "_Drive {} and leave at `{}` to arrive by {}_",
            format_hours(self.total_travel_hours),
            format_departure(&self.suggested_departure),
            format_arrival(&self.arrive_by)
        );
        buffer
    }

    fn joined_path(&self, separator: &str) -> String {
        self.legs
            .iter()
            .map(|leg| leg.city.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Format fractional hours as `Hh MMm`, rounding to the nearest minute.
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round().max(0.0) as u64;
    format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
}

/// Format a departure as date plus 12-hour clock time.
pub fn format_departure(departure: &NaiveDateTime) -> String {
    departure.format("%Y-%m-%d %I:%M %p").to_string()
}

/// Format an arrival target as an hour on the 12-hour clock, e.g. `6 PM`.
pub fn format_arrival(arrival: &NaiveTime) -> String {
    arrival.format("%-I %p").to_string()
}
