//! Core data types for the race results scraper
//!
//! Contains the exported result record and the fixed set of events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Country value used when the flag token cannot be resolved
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// One finisher's row from an event's results table
///
/// Serializes to exactly the seven keys of the export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Display name of the event the row was collected for
    pub event_name: String,

    /// Race bib number
    pub bib_number: u32,

    /// Gender as displayed on the page (e.g., "Male")
    pub gender: String,

    /// Resolved country name, or [`UNKNOWN_COUNTRY`]
    pub country: String,

    /// Finisher's displayed name
    pub name: String,

    /// Finish time as displayed (e.g., "02:41:17")
    pub time: String,

    /// Race category as displayed (e.g., "M40-44")
    pub category: String,
}

/// Events published for the competition
///
/// Declaration order is the export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Marathon,
    WheelchairMarathon,
    HalfMarathon,
    WheelchairHalfMarathon,
    TenKm,
    WheelchairTenKm,
    FiveKm,
    TwoKm,
}

impl Event {
    /// All events in export order
    pub const ALL: [Event; 8] = [
        Event::Marathon,
        Event::WheelchairMarathon,
        Event::HalfMarathon,
        Event::WheelchairHalfMarathon,
        Event::TenKm,
        Event::WheelchairTenKm,
        Event::FiveKm,
        Event::TwoKm,
    ];

    /// Numeric event identifier used in the `EId` query parameter
    pub fn id(self) -> u32 {
        match self {
            Event::Marathon => 1,
            Event::WheelchairMarathon => 8,
            Event::HalfMarathon => 2,
            Event::WheelchairHalfMarathon => 6,
            Event::TenKm => 3,
            Event::WheelchairTenKm => 9,
            Event::FiveKm => 4,
            Event::TwoKm => 5,
        }
    }

    /// Display name written to `event_name`
    pub fn name(self) -> &'static str {
        match self {
            Event::Marathon => "Marathon",
            Event::WheelchairMarathon => "Wheelchair Marathon",
            Event::HalfMarathon => "Half Marathon",
            Event::WheelchairHalfMarathon => "Wheelchair Half Marathon",
            Event::TenKm => "10km",
            Event::WheelchairTenKm => "Wheelchair 10km",
            Event::FiveKm => "5km",
            Event::TwoKm => "2km",
        }
    }

    /// Looks up an event by its numeric identifier
    pub fn from_id(id: u32) -> Option<Event> {
        Event::ALL.into_iter().find(|event| event.id() == id)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> RaceResult {
        RaceResult {
            event_name: "Marathon".to_string(),
            bib_number: 1042,
            gender: "Female".to_string(),
            country: "Australia".to_string(),
            name: "Jane Citizen".to_string(),
            time: "03:05:12".to_string(),
            category: "F35-39".to_string(),
        }
    }

    #[test]
    fn test_race_result_serialization() {
        let result = sample();
        let json = serde_json::to_string(&result).expect("Serialization should succeed");
        let deserialized: RaceResult =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(result, deserialized);
    }

    #[test]
    fn test_race_result_has_exactly_seven_keys() {
        let value = serde_json::to_value(sample()).expect("Serialization should succeed");
        let object = value.as_object().expect("Result should serialize to an object");

        let keys: HashSet<&str> = object.keys().map(String::as_str).collect();
        let expected: HashSet<&str> = [
            "event_name",
            "bib_number",
            "gender",
            "country",
            "name",
            "time",
            "category",
        ]
        .into_iter()
        .collect();
        assert_eq!(keys, expected);
        assert!(object["bib_number"].is_u64());
    }

    #[test]
    fn test_event_table_order() {
        let ids: Vec<u32> = Event::ALL.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 8, 2, 6, 3, 9, 4, 5]);
    }

    #[test]
    fn test_event_ids_and_names_unique() {
        let ids: HashSet<u32> = Event::ALL.iter().map(|e| e.id()).collect();
        let names: HashSet<&str> = Event::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(ids.len(), Event::ALL.len());
        assert_eq!(names.len(), Event::ALL.len());
    }

    #[test]
    fn test_event_from_id() {
        assert_eq!(Event::from_id(6), Some(Event::WheelchairHalfMarathon));
        assert_eq!(Event::from_id(5), Some(Event::TwoKm));
        assert_eq!(Event::from_id(7), None);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(Event::WheelchairTenKm.to_string(), "Wheelchair 10km");
    }
}
