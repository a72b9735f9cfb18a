//! Filtering and ordering over a snapshot of place records. Filtering is the
//! logical AND of every present filter field; sorts are stable, so records
//! with equal keys keep their snapshot order.

use crate::core::score::score;
use crate::domain::model::{Place, PlaceFilter, SortBy, Visit};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

/// A visit matches the query price range unless a known bound puts it
/// strictly outside; a visit with no price at all never matches.
fn price_overlaps(visit: &Visit, query_min: Option<u32>, query_max: Option<u32>) -> bool {
    if visit.price_min.is_none() && visit.price_max.is_none() {
        return false;
    }
    if let (Some(query_min), Some(visit_max)) = (query_min, visit.price_max) {
        if visit_max < query_min {
            return false;
        }
    }
    if let (Some(query_max), Some(visit_min)) = (query_max, visit.price_min) {
        if visit_min > query_max {
            return false;
        }
    }
    true
}

fn matches_search_text(place: &Place, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    place.name.to_lowercase().contains(&needle)
        || place.city.to_lowercase().contains(&needle)
        || place.station.to_lowercase().contains(&needle)
        || place
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

pub fn matches_filter(place: &Place, filter: &PlaceFilter) -> bool {
    if let Some(kind) = filter.kind {
        if place.kind() != kind {
            return false;
        }
    }
    if let Some(country) = &filter.country {
        if &place.country != country {
            return false;
        }
    }
    if let Some(city) = &filter.city {
        if &place.city != city {
            return false;
        }
    }
    if let Some(station) = &filter.station {
        if &place.station != station {
            return false;
        }
    }
    if let Some(line) = &filter.line {
        if place.line.as_ref() != Some(line) {
            return false;
        }
    }
    if let Some(genre) = &filter.genre {
        if &place.genre != genre {
            return false;
        }
    }
    if let Some(min_rating) = filter.min_rating {
        // The maximum rating across all visits governs, not the latest one.
        let max_rating = place.visits.iter().map(|v| v.rating).max().unwrap_or(0);
        if max_rating < min_rating {
            return false;
        }
    }
    if let Some(situation) = &filter.situation {
        let has_situation = place
            .visits
            .iter()
            .any(|v| v.situation.iter().any(|s| s == situation));
        if !has_situation {
            return false;
        }
    }
    if filter.price_min.is_some() || filter.price_max.is_some() {
        let has_matching_price = place
            .visits
            .iter()
            .any(|v| price_overlaps(v, filter.price_min, filter.price_max));
        if !has_matching_price {
            return false;
        }
    }
    if let Some(search_text) = &filter.search_text {
        if !matches_search_text(place, search_text) {
            return false;
        }
    }
    true
}

/// Stable descending sort by the requested criterion. The rating, revisit
/// and recent-visit sorts key on the last-appended visit.
pub fn apply_sort(places: &mut [Place], sort: SortBy, now: DateTime<Utc>) {
    match sort {
        SortBy::Recommended => {
            places.sort_by(|a, b| score(b, now).total_cmp(&score(a, now)));
        }
        SortBy::Rating => {
            places.sort_by_key(|p| Reverse(p.last_visit().map_or(0, |v| v.rating)));
        }
        SortBy::RevisitIntent => {
            places.sort_by_key(|p| Reverse(p.last_visit().map_or(0, |v| v.revisit_intent)));
        }
        SortBy::VisitCount => {
            places.sort_by_key(|p| Reverse(p.visits.len()));
        }
        SortBy::RecentVisit => {
            places.sort_by_key(|p| Reverse(p.last_visit().map(|v| v.visited_at)));
        }
    }
}

/// Filters and optionally orders a snapshot. Without a sort the snapshot
/// order is preserved.
pub fn list(
    places: Vec<Place>,
    filter: Option<&PlaceFilter>,
    sort: Option<SortBy>,
    now: DateTime<Utc>,
) -> Vec<Place> {
    let mut places: Vec<Place> = match filter {
        Some(filter) => places
            .into_iter()
            .filter(|p| matches_filter(p, filter))
            .collect(),
        None => places,
    };
    if let Some(sort) = sort {
        apply_sort(&mut places, sort, now);
    }
    places
}
