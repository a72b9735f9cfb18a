//! Payload validation helpers. Field constraints are checked at the boundary
//! that constructs input payloads; the store accepts anything matching the
//! model's shape and does not re-validate.

use crate::domain::model::{NewPlace, NewVisit, PlaceDetails};
use crate::utils::error::{PlacelogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_text(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlacelogError::ValidationError {
            message: format!("{} must not be empty", field_name),
        });
    }
    Ok(())
}

pub fn validate_score(field_name: &str, value: u8) -> Result<()> {
    if !(1..=5).contains(&value) {
        return Err(PlacelogError::ValidationError {
            message: format!("{} must be between 1 and 5, got {}", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_optional_score(field_name: &str, value: Option<u8>) -> Result<()> {
    match value {
        Some(v) => validate_score(field_name, v),
        None => Ok(()),
    }
}

pub fn validate_price_range(min: Option<u32>, max: Option<u32>) -> Result<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(PlacelogError::ValidationError {
                message: format!("price_min {} exceeds price_max {}", min, max),
            });
        }
    }
    Ok(())
}

impl Validate for NewPlace {
    fn validate(&self) -> Result<()> {
        validate_required_text("name", &self.name)?;
        validate_required_text("country", &self.country)?;
        validate_required_text("city", &self.city)?;
        validate_required_text("station", &self.station)?;
        validate_required_text("genre", &self.genre)?;

        match &self.details {
            PlaceDetails::Venue { booking_ease, .. } => {
                validate_optional_score("booking_ease", *booking_ease)?;
            }
            PlaceDetails::Lodging {
                wifi_quality,
                desk_work_friendly,
                access_score,
                ..
            } => {
                validate_optional_score("wifi_quality", *wifi_quality)?;
                validate_optional_score("desk_work_friendly", *desk_work_friendly)?;
                validate_optional_score("access_score", *access_score)?;
            }
        }

        Ok(())
    }
}

impl Validate for NewVisit {
    fn validate(&self) -> Result<()> {
        validate_required_text("author", &self.author)?;
        validate_score("rating", self.rating)?;
        validate_score("revisit_intent", self.revisit_intent)?;
        validate_price_range(self.price_min, self.price_max)?;
        Ok(())
    }
}
