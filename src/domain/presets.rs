//! Preset value lists offered by input forms. None of these are enforced at
//! the data layer; genre and situation remain free text in the model.

pub const DEFAULT_DEPARTMENT: &str = "Aerospace Division";

/// Situation tag the recommendation reasons key on.
pub const SITUATION_HOSTING: &str = "hosting";

pub const VENUE_GENRES: &[&str] = &[
    "japanese",
    "sushi",
    "yakitori",
    "yakiniku",
    "izakaya",
    "seafood",
    "tempura",
    "eel",
    "soba-udon",
    "ramen",
    "chinese",
    "korean",
    "thai-vietnamese",
    "indian-curry",
    "italian",
    "french",
    "spanish-bar",
    "bistro",
    "steak",
    "burger",
    "cafe",
    "bar",
    "wine bar",
    "craft beer",
    "other",
];

pub const LODGING_GENRES: &[&str] = &[
    "business",
    "standard",
    "luxury",
    "apartment",
    "airport hotel",
    "other",
];

pub const SITUATIONS: &[&str] = &[
    SITUATION_HOSTING,
    "client dinner",
    "team dinner",
    "solo meal",
    "dinner",
    "lunch",
    "afterparty",
    "bar",
    "night before trip",
    "night after trip",
    "long stay",
    "early departure",
    "budget",
    "atmosphere",
];

pub const VENUE_PRICE_SHORTCUTS: &[u32] = &[5_000, 8_000, 10_000, 15_000, 20_000, 30_000];
pub const LODGING_PRICE_SHORTCUTS: &[u32] = &[12_000, 15_000, 20_000, 25_000, 30_000, 40_000];
