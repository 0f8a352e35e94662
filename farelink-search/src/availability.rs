use farelink_core::{CabinCounts, FlightRecord, FlightRow, SeatRow, SeatStatus};
use std::collections::HashMap;
use uuid::Uuid;

/// Rebuilds per-flight, per-cabin available-seat counts from raw seat rows.
///
/// Runs on every cache read as well as on fresh fetches; the cache stores
/// the raw rows, never the counts, so this must stay deterministic and
/// cheap.
pub fn aggregate_availability(flights: &[FlightRow], seats: &[SeatRow]) -> Vec<FlightRecord> {
    let mut counts: HashMap<Uuid, CabinCounts> = HashMap::new();
    for row in seats {
        if row.status == SeatStatus::Available {
            counts.entry(row.flight_id).or_default().add(row.cabin_class);
        }
    }

    flights
        .iter()
        .map(|flight| FlightRecord {
            flight: flight.clone(),
            seats_available: counts.get(&flight.id).copied().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use farelink_core::{CabinAmounts, CabinClass, FlightStatus};

    fn flight(id: Uuid) -> FlightRow {
        let departure = Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap();
        FlightRow {
            id,
            flight_number: "FL1".to_string(),
            airline: "UA".to_string(),
            origin: "SFO".to_string(),
            destination: "JFK".to_string(),
            departure_time: departure,
            arrival_time: departure + chrono::Duration::minutes(330),
            status: FlightStatus::Scheduled,
            prices: CabinAmounts::default(),
        }
    }

    fn seat(flight_id: Uuid, cabin: CabinClass, number: &str, status: SeatStatus) -> SeatRow {
        SeatRow {
            flight_id,
            cabin_class: cabin,
            seat_number: number.to_string(),
            status,
        }
    }

    #[test]
    fn test_counts_only_available_seats() {
        let id = Uuid::new_v4();
        let seats = vec![
            seat(id, CabinClass::Economy, "21A", SeatStatus::Available),
            seat(id, CabinClass::Economy, "21B", SeatStatus::Booked),
            seat(id, CabinClass::Economy, "21C", SeatStatus::Available),
            seat(id, CabinClass::Business, "2A", SeatStatus::Held),
        ];

        let records = aggregate_availability(&[flight(id)], &seats);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seats_for(CabinClass::Economy), 2);
        assert_eq!(records[0].seats_for(CabinClass::Business), 0);
    }

    #[test]
    fn test_seats_grouped_per_flight() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let seats = vec![
            seat(a, CabinClass::Economy, "21A", SeatStatus::Available),
            seat(b, CabinClass::Economy, "21A", SeatStatus::Available),
            seat(b, CabinClass::Economy, "21B", SeatStatus::Available),
        ];

        let records = aggregate_availability(&[flight(a), flight(b)], &seats);
        assert_eq!(records[0].seats_for(CabinClass::Economy), 1);
        assert_eq!(records[1].seats_for(CabinClass::Economy), 2);
    }

    #[test]
    fn test_flight_without_seat_rows_counts_zero() {
        let records = aggregate_availability(&[flight(Uuid::new_v4())], &[]);
        assert_eq!(records[0].seats_available, CabinCounts::default());
    }
}
