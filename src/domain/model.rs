use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One dated evaluation of a place. Visits are owned by their parent
/// [`Place`] and are append-only: past visits are never edited or removed
/// individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub visited_at: DateTime<Utc>,
    pub author: String,
    /// 1-5
    pub rating: u8,
    /// 1-5
    pub revisit_intent: u8,
    pub comment: String,
    pub situation: Vec<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Lodging,
    Venue,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceKind::Lodging => write!(f, "lodging"),
            PlaceKind::Venue => write!(f, "venue"),
        }
    }
}

impl FromStr for PlaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lodging" => Ok(PlaceKind::Lodging),
            "venue" => Ok(PlaceKind::Venue),
            other => Err(format!("unknown place kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    Restaurant,
    Izakaya,
    Bar,
    Cafe,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LodgingType {
    Business,
    Standard,
    Luxury,
    Apartment,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StayType {
    Short,
    Long,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingPolicy {
    No,
    Yes,
    Separated,
    Unknown,
}

/// Variant-specific attributes, keyed by the place discriminant. Matched
/// exhaustively wherever venue/lodging behavior differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceDetails {
    Venue {
        venue_type: VenueType,
        private_room: Option<bool>,
        smoking: SmokingPolicy,
        /// 1-5
        booking_ease: Option<u8>,
    },
    Lodging {
        lodging_type: LodgingType,
        stay_type: StayType,
        breakfast: Option<bool>,
        /// 1-5
        wifi_quality: Option<u8>,
        /// 1-5
        desk_work_friendly: Option<u8>,
        /// 1-5
        access_score: Option<u8>,
    },
}

impl PlaceDetails {
    pub fn kind(&self) -> PlaceKind {
        match self {
            PlaceDetails::Venue { .. } => PlaceKind::Venue,
            PlaceDetails::Lodging { .. } => PlaceKind::Lodging,
        }
    }
}

/// A lodging or dining/social venue with its append-only visit history.
///
/// `visits` is never empty after creation: a place comes into existence
/// together with its first visit. Insertion order is append order, which is
/// not necessarily date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub details: PlaceDetails,
    pub name: String,
    pub country: String,
    pub city: String,
    pub area: Option<String>,
    pub station: String,
    pub line: Option<String>,
    pub genre: String,
    pub tags: Vec<String>,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub visits: Vec<Visit>,
}

impl Place {
    pub fn kind(&self) -> PlaceKind {
        self.details.kind()
    }

    /// Last-appended visit (positional, not the chronologically newest one).
    pub fn last_visit(&self) -> Option<&Visit> {
        self.visits.last()
    }
}

/// Place fields supplied by the caller when creating a record; id, visit
/// sequence and timestamps are assigned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlace {
    pub details: PlaceDetails,
    pub name: String,
    pub country: String,
    pub city: String,
    pub area: Option<String>,
    pub station: String,
    pub line: Option<String>,
    pub genre: String,
    pub tags: Vec<String>,
    pub department: String,
}

/// Visit fields supplied by the caller; the id is assigned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVisit {
    pub visited_at: DateTime<Utc>,
    pub author: String,
    pub rating: u8,
    pub revisit_intent: u8,
    pub comment: String,
    pub situation: Vec<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
}

/// Conjunctive listing filter. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceFilter {
    pub kind: Option<PlaceKind>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub station: Option<String>,
    pub line: Option<String>,
    pub genre: Option<String>,
    /// A single situation tag; matches when any visit carries it.
    pub situation: Option<String>,
    /// Passes when the maximum rating across all visits reaches this.
    pub min_rating: Option<u8>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub search_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Recommended,
    Rating,
    RevisitIntent,
    VisitCount,
    RecentVisit,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(SortBy::Recommended),
            "rating" => Ok(SortBy::Rating),
            "revisit-intent" => Ok(SortBy::RevisitIntent),
            "visit-count" => Ok(SortBy::VisitCount),
            "recent-visit" => Ok(SortBy::RecentVisit),
            other => Err(format!("unknown sort option: {}", other)),
        }
    }
}

/// Distinct non-empty field values observed across all stored places,
/// offered for input assistance. Order is not significant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suggestions {
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub stations: Vec<String>,
    pub lines: Vec<String>,
}
