use crate::cabin::CabinClass;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-cabin monetary amounts in minor currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinAmounts {
    pub economy: i64,
    pub premium_economy: i64,
    pub business: i64,
    pub first: i64,
}

impl CabinAmounts {
    pub fn for_cabin(&self, cabin: CabinClass) -> i64 {
        match cabin {
            CabinClass::Economy => self.economy,
            CabinClass::PremiumEconomy => self.premium_economy,
            CabinClass::Business => self.business,
            CabinClass::First => self.first,
        }
    }
}

/// Per-cabin seat counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinCounts {
    pub economy: u32,
    pub premium_economy: u32,
    pub business: u32,
    pub first: u32,
}

impl CabinCounts {
    pub fn for_cabin(&self, cabin: CabinClass) -> u32 {
        match cabin {
            CabinClass::Economy => self.economy,
            CabinClass::PremiumEconomy => self.premium_economy,
            CabinClass::Business => self.business,
            CabinClass::First => self.first,
        }
    }

    pub fn add(&mut self, cabin: CabinClass) {
        match cabin {
            CabinClass::Economy => self.economy += 1,
            CabinClass::PremiumEconomy => self.premium_economy += 1,
            CabinClass::Business => self.business += 1,
            CabinClass::First => self.first += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    Departed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Held,
    Booked,
}

/// One physical seat on one flight, as returned by the upstream seat-map
/// query. Availability counts are always recomputed from these rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    pub flight_id: Uuid,
    pub cabin_class: CabinClass,
    pub seat_number: String,
    pub status: SeatStatus,
}

/// Flight schedule and pricing as fetched from the upstream data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRow {
    pub id: Uuid,
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
    pub prices: CabinAmounts,
}

impl FlightRow {
    pub fn duration_minutes(&self) -> i64 {
        (self.arrival_time - self.departure_time).num_minutes()
    }
}

/// Immutable snapshot of a flight plus the seat availability derived from
/// its seat rows at read time. Never refreshed in place; a fresh fetch
/// supersedes the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight: FlightRow,
    pub seats_available: CabinCounts,
}

impl FlightRecord {
    pub fn price_for(&self, cabin: CabinClass) -> i64 {
        self.flight.prices.for_cabin(cabin)
    }

    pub fn seats_for(&self, cabin: CabinClass) -> u32 {
        self.seats_available.for_cabin(cabin)
    }

    pub fn duration_minutes(&self) -> i64 {
        self.flight.duration_minutes()
    }
}
