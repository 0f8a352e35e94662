use farelink_core::{
    CabinClass, CriteriaError, FilterCriteria, FlightRecord, SortField, SortOrder, SortSpec,
};
use std::cmp::Ordering;

/// Filters and sorts `records` without touching the input.
///
/// Supplied criteria are ANDed; absent criteria match everything. The sort
/// is stable in both directions, so equal-keyed flights keep their input
/// order. Price predicates and price sorting read the cabin named in the
/// criteria (economy when unspecified).
pub fn evaluate(
    records: &[FlightRecord],
    criteria: &FilterCriteria,
    sort: &SortSpec,
) -> Result<Vec<FlightRecord>, CriteriaError> {
    criteria.validate()?;

    let cabin = criteria.cabin_class.unwrap_or_default();
    let mut selected: Vec<FlightRecord> = records
        .iter()
        .filter(|record| matches(record, criteria, cabin))
        .cloned()
        .collect();

    // sort_by is stable; descending swaps operands so ties still compare
    // Equal and keep their relative order
    match sort.order {
        SortOrder::Asc => selected.sort_by(|a, b| compare(a, b, sort.field, cabin)),
        SortOrder::Desc => selected.sort_by(|a, b| compare(b, a, sort.field, cabin)),
    }

    Ok(selected)
}

fn matches(record: &FlightRecord, criteria: &FilterCriteria, cabin: CabinClass) -> bool {
    if let Some(range) = criteria.price_range {
        let price = record.price_for(cabin);
        if price < range.min || price > range.max {
            return false;
        }
    }

    if let Some(ref airlines) = criteria.airlines {
        if !airlines
            .iter()
            .any(|a| a.eq_ignore_ascii_case(&record.flight.airline))
        {
            return false;
        }
    }

    if let Some(window) = criteria.departure_window {
        let departure = record.flight.departure_time;
        if departure < window.start || departure > window.end {
            return false;
        }
    }

    // Seat floor applies only when the caller names both a count and a cabin
    if let (Some(minimum), Some(seat_cabin)) = (criteria.minimum_seats, criteria.cabin_class) {
        if record.seats_for(seat_cabin) < minimum {
            return false;
        }
    }

    true
}

fn compare(a: &FlightRecord, b: &FlightRecord, field: SortField, cabin: CabinClass) -> Ordering {
    match field {
        SortField::Price => a.price_for(cabin).cmp(&b.price_for(cabin)),
        SortField::Duration => a.duration_minutes().cmp(&b.duration_minutes()),
        SortField::DepartureTime => a.flight.departure_time.cmp(&b.flight.departure_time),
        SortField::ArrivalTime => a.flight.arrival_time.cmp(&b.flight.arrival_time),
    }
}
