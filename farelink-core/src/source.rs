use crate::flight::{FlightRow, SeatRow};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Read access to the external flight data service.
///
/// Implementations query by equality/range predicates on airport codes and
/// dates and must only return flights still in `Scheduled` status.
#[async_trait]
pub trait FlightDataSource: Send + Sync {
    async fn fetch_scheduled_flights(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightRow>, Box<dyn std::error::Error + Send + Sync>>;

    async fn fetch_seat_rows(
        &self,
        flight_ids: &[Uuid],
    ) -> Result<Vec<SeatRow>, Box<dyn std::error::Error + Send + Sync>>;
}
