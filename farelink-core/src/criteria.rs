use crate::cabin::CabinClass;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("price range is inverted: min {min} > max {max}")]
    InvertedPriceRange { min: i64, max: i64 },

    #[error("departure window is inverted: start {start} > end {end}")]
    InvertedTimeWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Inclusive price bounds in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Inclusive departure-time bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Caller-supplied filter. Absent fields are no-ops; supplied fields are
/// ANDed together. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price_range: Option<PriceRange>,
    pub airlines: Option<Vec<String>>,
    pub departure_window: Option<TimeWindow>,
    pub cabin_class: Option<CabinClass>,
    pub minimum_seats: Option<u32>,
}

impl FilterCriteria {
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let Some(range) = self.price_range {
            if range.min > range.max {
                return Err(CriteriaError::InvertedPriceRange {
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if let Some(window) = self.departure_window {
            if window.start > window.end {
                return Err(CriteriaError::InvertedTimeWindow {
                    start: window.start,
                    end: window.end,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Price,
    Duration,
    DepartureTime,
    ArrivalTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::DepartureTime,
            order: SortOrder::Asc,
        }
    }
}
