//! Ranking score and recommendation reasons for a single place. Pure
//! functions: callers supply `now` so results are reproducible.
//!
//! Both are driven by the last-appended visit, not the chronologically
//! newest one.

use crate::domain::model::{Place, PlaceDetails};
use crate::domain::presets::SITUATION_HOSTING;
use chrono::{DateTime, Utc};

/// Days within which a visit still earns a recency boost.
const RECENCY_WINDOW_DAYS: f64 = 180.0;

/// Days within which a place counts as "recently used".
const RECENTLY_USED_DAYS: i64 = 90;

fn days_since(visited_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((now - visited_at).num_seconds() as f64 / 86_400.0).floor()
}

/// Ranking score; 0.0 for a place with no visits.
pub fn score(place: &Place, now: DateTime<Utc>) -> f64 {
    let Some(last) = place.last_visit() else {
        return 0.0;
    };

    let visit_count = place.visits.len() as f64;
    let recentness_boost =
        (RECENCY_WINDOW_DAYS - days_since(last.visited_at, now)).max(0.0) / RECENCY_WINDOW_DAYS;

    last.rating as f64 * 0.6
        + last.revisit_intent as f64 * 0.4
        + (visit_count + 1.0).ln() * 0.2
        + recentness_boost * 0.1
}

/// Human-readable reasons a place ranks well, in fixed priority order. Empty
/// for a place with no visits.
pub fn recommendation_reasons(place: &Place, now: DateTime<Utc>) -> Vec<String> {
    let mut reasons = Vec::new();
    let Some(last) = place.last_visit() else {
        return reasons;
    };

    if last.rating >= 4 {
        reasons.push("high rating".to_string());
    }
    if last.revisit_intent >= 4 {
        reasons.push("strong intent to return".to_string());
    }
    if place.visits.len() >= 3 {
        reasons.push(format!("repeat usage ({} visits)", place.visits.len()));
    }
    if last.situation.iter().any(|s| s == SITUATION_HOSTING) {
        reasons.push("used for hosting".to_string());
    }
    if let PlaceDetails::Venue {
        private_room: Some(true),
        ..
    } = place.details
    {
        reasons.push("private room available".to_string());
    }
    if days_since(last.visited_at, now) <= RECENTLY_USED_DAYS as f64 {
        reasons.push("recently used".to_string());
    }

    reasons
}

/// A place decorated with its score, for callers that render ranked listings.
#[derive(Debug, Clone)]
pub struct ScoredPlace {
    pub place: Place,
    pub score: f64,
}

pub fn with_scores(places: Vec<Place>, now: DateTime<Utc>) -> Vec<ScoredPlace> {
    places
        .into_iter()
        .map(|place| {
            let score = score(&place, now);
            ScoredPlace { place, score }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SmokingPolicy, VenueType, Visit};
    use chrono::Duration;

    fn venue(visits: Vec<Visit>, private_room: Option<bool>) -> Place {
        let now = Utc::now();
        Place {
            id: "p1".to_string(),
            details: PlaceDetails::Venue {
                venue_type: VenueType::Restaurant,
                private_room,
                smoking: SmokingPolicy::Unknown,
                booking_ease: None,
            },
            name: "Kappo Ishikawa".to_string(),
            country: "Japan".to_string(),
            city: "Tokyo".to_string(),
            area: None,
            station: "Kagurazaka".to_string(),
            line: None,
            genre: "japanese".to_string(),
            tags: vec![],
            department: "Aerospace Division".to_string(),
            created_at: now,
            updated_at: now,
            visits,
        }
    }

    fn visit(rating: u8, revisit_intent: u8, days_ago: i64, situation: Vec<&str>) -> Visit {
        Visit {
            id: "v".to_string(),
            visited_at: Utc::now() - Duration::days(days_ago),
            author: "Sato".to_string(),
            rating,
            revisit_intent,
            comment: String::new(),
            situation: situation.into_iter().map(String::from).collect(),
            price_min: None,
            price_max: None,
        }
    }

    #[test]
    fn test_score_is_zero_without_visits() {
        assert_eq!(score(&venue(vec![], None), Utc::now()), 0.0);
        assert!(recommendation_reasons(&venue(vec![], None), Utc::now()).is_empty());
    }

    #[test]
    fn test_score_single_fresh_visit() {
        // rating 5, intent 5, one visit 10 days ago:
        // 5*0.6 + 5*0.4 + ln(2)*0.2 + (170/180)*0.1
        let place = venue(vec![visit(5, 5, 10, vec![SITUATION_HOSTING])], None);
        let expected = 3.0 + 2.0 + 2.0_f64.ln() * 0.2 + (170.0 / 180.0) * 0.1;
        assert!((score(&place, Utc::now()) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_score_monotonic_in_rating_and_intent() {
        let now = Utc::now();
        for base in 1..5u8 {
            let lower = venue(vec![visit(base, 3, 30, vec![])], None);
            let higher = venue(vec![visit(base + 1, 3, 30, vec![])], None);
            assert!(score(&higher, now) > score(&lower, now));

            let lower = venue(vec![visit(3, base, 30, vec![])], None);
            let higher = venue(vec![visit(3, base + 1, 30, vec![])], None);
            assert!(score(&higher, now) > score(&lower, now));
        }
    }

    #[test]
    fn test_no_recency_boost_past_window() {
        let now = Utc::now();
        let stale = venue(vec![visit(3, 3, 400, vec![])], None);
        let very_stale = venue(vec![visit(3, 3, 4000, vec![])], None);
        assert_eq!(score(&stale, now), score(&very_stale, now));
    }

    #[test]
    fn test_score_uses_last_appended_visit_not_newest_date() {
        let now = Utc::now();
        // Older visit appended last: positional semantics must pick it up.
        let place = venue(vec![visit(5, 5, 10, vec![]), visit(1, 1, 300, vec![])], None);
        let last_only = venue(vec![visit(1, 1, 300, vec![]), visit(1, 1, 300, vec![])], None);
        assert!((score(&place, now) - score(&last_only, now)).abs() < 1e-9);
    }

    #[test]
    fn test_reasons_for_fresh_hosting_visit() {
        let place = venue(vec![visit(5, 5, 10, vec![SITUATION_HOSTING])], None);
        let reasons = recommendation_reasons(&place, Utc::now());
        assert_eq!(
            reasons,
            vec![
                "high rating",
                "strong intent to return",
                "used for hosting",
                "recently used",
            ]
        );
    }

    #[test]
    fn test_repeat_usage_counts_visits() {
        let place = venue(
            vec![
                visit(2, 2, 400, vec![]),
                visit(2, 2, 300, vec![]),
                visit(2, 2, 200, vec![]),
            ],
            None,
        );
        let reasons = recommendation_reasons(&place, Utc::now());
        assert_eq!(reasons, vec!["repeat usage (3 visits)"]);
    }

    #[test]
    fn test_private_room_reason_requires_venue_flag() {
        let with_room = venue(vec![visit(3, 3, 200, vec![])], Some(true));
        assert!(recommendation_reasons(&with_room, Utc::now())
            .contains(&"private room available".to_string()));

        let without = venue(vec![visit(3, 3, 200, vec![])], Some(false));
        assert!(!recommendation_reasons(&without, Utc::now())
            .contains(&"private room available".to_string()));
    }
}
