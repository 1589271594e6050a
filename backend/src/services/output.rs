//! Human-readable weekly opening hours.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{WeeklySchedule, Weekday};

/// Text shown for a day without any timeslot.
pub const CLOSED: &str = "Closed";

/// Opening hours of each weekday as display text, in calendar order.
///
/// Serializes as a JSON object keyed by the capitalized weekday name, e.g.
/// `{"Monday": "9 AM - 6 PM", "Tuesday": "Closed", ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettySchedule {
    days: [String; 7],
}

impl PrettySchedule {
    /// Text for `day`.
    pub fn get(&self, day: Weekday) -> &str {
        &self.days[day.index()]
    }

    /// Pairs of display name and text, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Weekday::ALL
            .into_iter()
            .map(move |day| (day.display_name(), self.get(day)))
    }
}

impl From<&WeeklySchedule> for PrettySchedule {
    fn from(schedule: &WeeklySchedule) -> Self {
        Self {
            days: Weekday::ALL.map(|day| render_day(schedule, day)),
        }
    }
}

fn render_day(schedule: &WeeklySchedule, day: Weekday) -> String {
    let slots = schedule.day(day);
    if slots.is_empty() {
        return CLOSED.to_string();
    }
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Serialize for PrettySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (name, text) in self.iter() {
            map.serialize_entry(name, text)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Timeslot;
    use chrono::NaiveTime;

    fn slot(open: (u32, u32), close: (u32, u32), closes_on: Weekday) -> Timeslot {
        Timeslot {
            opening: NaiveTime::from_hms_opt(open.0, open.1, 0).unwrap(),
            closing: NaiveTime::from_hms_opt(close.0, close.1, 0).unwrap(),
            closes_on,
        }
    }

    #[test]
    fn test_empty_schedule_is_closed_everywhere() {
        let pretty = PrettySchedule::from(&WeeklySchedule::new());
        for (_, text) in pretty.iter() {
            assert_eq!(text, CLOSED);
        }
    }

    #[test]
    fn test_slots_are_joined_in_order() {
        let mut schedule = WeeklySchedule::new();
        schedule.push(Weekday::Thursday, slot((9, 0), (17, 0), Weekday::Thursday));
        schedule.push(Weekday::Thursday, slot((18, 30), (23, 0), Weekday::Thursday));

        let pretty = PrettySchedule::from(&schedule);
        assert_eq!(pretty.get(Weekday::Thursday), "9 AM - 5 PM, 6:30 PM - 11 PM");
        assert_eq!(pretty.get(Weekday::Friday), CLOSED);
    }

    #[test]
    fn test_serializes_in_calendar_order() {
        let mut schedule = WeeklySchedule::new();
        schedule.push(Weekday::Sunday, slot((23, 0), (1, 0), Weekday::Monday));

        let json = serde_json::to_string(&PrettySchedule::from(&schedule)).unwrap();
        let expected = concat!(
            r#"{"Monday":"Closed","Tuesday":"Closed","Wednesday":"Closed","#,
            r#""Thursday":"Closed","Friday":"Closed","Saturday":"Closed","#,
            r#""Sunday":"11 PM - 1 AM"}"#
        );
        assert_eq!(json, expected);
    }
}
