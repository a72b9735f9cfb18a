//! Distinct non-empty location values across all records, for autocomplete.

use crate::domain::model::{Place, Suggestions};
use std::collections::HashSet;

fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let set: HashSet<&str> = values.filter(|v| !v.is_empty()).collect();
    set.into_iter().map(String::from).collect()
}

pub fn suggestions(places: &[Place]) -> Suggestions {
    Suggestions {
        countries: distinct(places.iter().map(|p| p.country.as_str())),
        cities: distinct(places.iter().map(|p| p.city.as_str())),
        stations: distinct(places.iter().map(|p| p.station.as_str())),
        lines: distinct(places.iter().filter_map(|p| p.line.as_deref())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PlaceDetails, SmokingPolicy, VenueType, Visit};
    use chrono::Utc;

    fn place(country: &str, city: &str, station: &str, line: Option<&str>) -> Place {
        let now = Utc::now();
        Place {
            id: format!("{}-{}", city, station),
            details: PlaceDetails::Venue {
                venue_type: VenueType::Restaurant,
                private_room: None,
                smoking: SmokingPolicy::Unknown,
                booking_ease: None,
            },
            name: "N".to_string(),
            country: country.to_string(),
            city: city.to_string(),
            area: None,
            station: station.to_string(),
            line: line.map(String::from),
            genre: "other".to_string(),
            tags: vec![],
            department: "Aerospace Division".to_string(),
            created_at: now,
            updated_at: now,
            visits: vec![Visit {
                id: "v".to_string(),
                visited_at: now,
                author: "Sato".to_string(),
                rating: 3,
                revisit_intent: 3,
                comment: String::new(),
                situation: vec![],
                price_min: None,
                price_max: None,
            }],
        }
    }

    #[test]
    fn test_values_are_deduplicated_and_empty_dropped() {
        let places = vec![
            place("Japan", "Tokyo", "Shinagawa", Some("JR Yamanote Line")),
            place("Japan", "Tokyo", "Ginza", None),
            place("Germany", "Berlin", "", Some("U2")),
        ];

        let s = suggestions(&places);

        let mut countries = s.countries.clone();
        countries.sort();
        assert_eq!(countries, vec!["Germany", "Japan"]);

        let mut cities = s.cities.clone();
        cities.sort();
        assert_eq!(cities, vec!["Berlin", "Tokyo"]);

        let mut stations = s.stations.clone();
        stations.sort();
        assert_eq!(stations, vec!["Ginza", "Shinagawa"]);

        let mut lines = s.lines.clone();
        lines.sort();
        assert_eq!(lines, vec!["JR Yamanote Line", "U2"]);
    }

    #[test]
    fn test_empty_store_yields_empty_lists() {
        let s = suggestions(&[]);
        assert!(s.countries.is_empty());
        assert!(s.cities.is_empty());
        assert!(s.stations.is_empty());
        assert!(s.lines.is_empty());
    }
}
