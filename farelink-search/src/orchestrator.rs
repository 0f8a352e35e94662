use crate::availability::aggregate_availability;
use crate::worker::QueryWorker;
use farelink_core::{
    FilterCriteria, FlightDataSource, FlightRecord, SearchError, SearchParams, SearchResults,
    SortSpec,
};
use farelink_store::{CacheEntry, SearchCache, SearchKey};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Ties one search call together: validation, cache lookup, upstream fetch
/// on a miss, seat-availability aggregation, and worker-side filter/sort.
///
/// Explicitly constructed and caller-owned; create one per consumer and
/// `shutdown` it when the consumer goes away.
pub struct SearchOrchestrator {
    source: Arc<dyn FlightDataSource>,
    cache: Arc<SearchCache>,
    worker: QueryWorker,
}

impl SearchOrchestrator {
    pub fn new(source: Arc<dyn FlightDataSource>, cache: Arc<SearchCache>, worker: QueryWorker) -> Self {
        Self {
            source,
            cache,
            worker,
        }
    }

    /// Runs one search. Cache trouble degrades to a miss; every other
    /// failing step surfaces as a single error, never a partial result.
    pub async fn search(
        &self,
        params: &SearchParams,
        criteria: &FilterCriteria,
        sort: &SortSpec,
    ) -> Result<SearchResults, SearchError> {
        params.validate()?;

        let key = SearchKey::from_params(params);
        let cached = match self.cache.get(&key).await {
            Ok(cached) => cached,
            Err(e) => {
                // Degrade to always-miss rather than failing the search
                let e = SearchError::from(e);
                warn!(key = %key, "treating search as miss: {}", e);
                None
            }
        };

        let entry = match cached {
            Some(entry) => {
                info!(key = %key, flights = entry.flights.len(), "search cache hit");
                entry
            }
            None => {
                let entry = self.fetch_entry(params).await?;
                if let Err(e) = self.cache.put(&key, &entry).await {
                    warn!(key = %key, "cache write failed: {}", e);
                }
                entry
            }
        };

        let records = aggregate_availability(&entry.flights, &entry.seats);
        let (outbound, inbound) = split_legs(records, params);
        let criteria = effective_criteria(criteria, params);

        let outbound = self
            .worker
            .submit(outbound, criteria.clone(), *sort)
            .await
            .map_err(|e| SearchError::Evaluation(e.to_string()))?;
        let inbound = if params.return_date.is_some() {
            self.worker
                .submit(inbound, criteria, *sort)
                .await
                .map_err(|e| SearchError::Evaluation(e.to_string()))?
        } else {
            Vec::new()
        };

        Ok(SearchResults { outbound, inbound })
    }

    /// Disposes the owned worker. Call on unmount.
    pub async fn shutdown(self) {
        self.worker.shutdown().await;
    }

    async fn fetch_entry(&self, params: &SearchParams) -> Result<CacheEntry, SearchError> {
        let mut flights = self
            .source
            .fetch_scheduled_flights(&params.origin, &params.destination, params.departure_date)
            .await
            .map_err(|e| SearchError::Upstream(e.to_string()))?;

        if let Some(return_date) = params.return_date {
            let back = self
                .source
                .fetch_scheduled_flights(&params.destination, &params.origin, return_date)
                .await
                .map_err(|e| SearchError::Upstream(e.to_string()))?;
            flights.extend(back);
        }

        let ids: Vec<Uuid> = flights.iter().map(|f| f.id).collect();
        let seats = self
            .source
            .fetch_seat_rows(&ids)
            .await
            .map_err(|e| SearchError::Upstream(e.to_string()))?;

        info!(
            flights = flights.len(),
            seats = seats.len(),
            "fetched fresh search results"
        );
        Ok(CacheEntry::new(flights, seats))
    }
}

/// Fills criteria the caller left open: the searched cabin, and a seat
/// floor covering every seat-occupying passenger.
fn effective_criteria(criteria: &FilterCriteria, params: &SearchParams) -> FilterCriteria {
    let mut criteria = criteria.clone();
    if criteria.cabin_class.is_none() {
        criteria.cabin_class = Some(params.cabin_class);
    }
    if criteria.minimum_seats.is_none() {
        criteria.minimum_seats = Some(params.passengers.seated().max(1));
    }
    criteria
}

fn split_legs(
    records: Vec<FlightRecord>,
    params: &SearchParams,
) -> (Vec<FlightRecord>, Vec<FlightRecord>) {
    records
        .into_iter()
        .partition(|r| r.flight.origin.eq_ignore_ascii_case(&params.origin))
}
