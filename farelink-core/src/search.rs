use crate::cabin::CabinClass;
use crate::error::SearchError;
use crate::flight::FlightRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl PassengerCounts {
    /// Passengers that occupy a seat (infants travel on a lap).
    pub fn seated(&self) -> u32 {
        self.adults + self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub cabin_class: CabinClass,
    pub passengers: PassengerCounts,
}

impl SearchParams {
    /// Checks the mandatory fields before any cache or network activity.
    pub fn validate(&self) -> Result<(), SearchError> {
        validate_airport_code(&self.origin, "origin")?;
        validate_airport_code(&self.destination, "destination")?;

        if self.origin.eq_ignore_ascii_case(&self.destination) {
            return Err(SearchError::Validation(
                "origin and destination must differ".to_string(),
            ));
        }

        if let Some(return_date) = self.return_date {
            if return_date < self.departure_date {
                return Err(SearchError::Validation(format!(
                    "return date {} is before departure date {}",
                    return_date, self.departure_date
                )));
            }
        }

        if self.passengers.seated() == 0 {
            return Err(SearchError::Validation(
                "at least one seated passenger is required".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_airport_code(code: &str, field: &str) -> Result<(), SearchError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(SearchError::Validation(format!(
            "{} must be a 3-letter airport code, got {:?}",
            field, code
        )))
    }
}

/// Final, filtered and sorted answer to one search call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub outbound: Vec<FlightRecord>,
    #[serde(rename = "return")]
    pub inbound: Vec<FlightRecord>,
}
