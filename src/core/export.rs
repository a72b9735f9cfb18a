//! Flattens place records into a comma-separated text table, one row per
//! (place, visit) pair.
//!
//! Known limitation, kept on purpose: commas inside free-text comments are
//! replaced with a space instead of being quoted, so the output is not
//! RFC 4180. Tag lists use "; " as an inner delimiter.

use crate::domain::model::{Place, PlaceKind};

const TAG_DELIMITER: &str = "; ";

const HEADER: &str = "id,type,name,country,city,area,station,line,genre,tags,\
visited_at,author,rating,revisit_intent,comment,situation,price_min,price_max";

fn kind_label(kind: PlaceKind) -> &'static str {
    match kind {
        PlaceKind::Lodging => "Lodging",
        PlaceKind::Venue => "Venue",
    }
}

fn price_column(price: Option<u32>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// Renders the table for an already-filtered snapshot.
pub fn export_table(places: &[Place]) -> String {
    let mut rows = vec![HEADER.to_string()];

    for place in places {
        for visit in &place.visits {
            let columns = [
                place.id.clone(),
                kind_label(place.kind()).to_string(),
                place.name.clone(),
                place.country.clone(),
                place.city.clone(),
                place.area.clone().unwrap_or_default(),
                place.station.clone(),
                place.line.clone().unwrap_or_default(),
                place.genre.clone(),
                place.tags.join(TAG_DELIMITER),
                visit.visited_at.format("%Y-%m-%d").to_string(),
                visit.author.clone(),
                visit.rating.to_string(),
                visit.revisit_intent.to_string(),
                visit.comment.replace(',', " "),
                visit.situation.join(TAG_DELIMITER),
                price_column(visit.price_min),
                price_column(visit.price_max),
            ];
            rows.push(columns.join(","));
        }
    }

    rows.join("\n")
}
