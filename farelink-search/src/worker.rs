use crate::evaluate::evaluate;
use farelink_core::{CriteriaError, FilterCriteria, FlightRecord, SortSpec};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum QueryWorkerError {
    #[error("invalid criteria: {0}")]
    Criteria(#[from] CriteriaError),

    #[error("query worker is no longer running")]
    Stopped,

    #[error("response correlation mismatch: expected {expected}, got {got}")]
    Correlation { expected: Uuid, got: Uuid },
}

#[derive(Debug)]
pub struct EvaluateRequest {
    pub request_id: Uuid,
    pub records: Vec<FlightRecord>,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
}

#[derive(Debug)]
pub struct EvaluateResponse {
    pub request_id: Uuid,
    pub result: Result<Vec<FlightRecord>, QueryWorkerError>,
}

struct Job {
    request: EvaluateRequest,
    reply: oneshot::Sender<EvaluateResponse>,
}

/// Background filter/sort executor.
///
/// A caller-owned instance with an explicit lifecycle: `spawn` it when the
/// consumer mounts, `shutdown` it when the consumer goes away. Every request
/// carries a request id that is echoed in the response and checked on
/// receipt, and overlapping calls queue on a bounded channel, so concurrent
/// submissions can never receive each other's results. A caller that drops
/// its pending response simply abandons that call; the worker keeps serving.
pub struct QueryWorker {
    tx: mpsc::Sender<Job>,
    handle: JoinHandle<()>,
}

impl QueryWorker {
    pub fn spawn(queue_depth: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<Job>(queue_depth);

        let handle = tokio::spawn(async move {
            info!("query worker started");
            while let Some(Job { request, reply }) = rx.recv().await {
                let EvaluateRequest {
                    request_id,
                    records,
                    criteria,
                    sort,
                } = request;
                debug!(%request_id, records = records.len(), "evaluating query");

                let result = evaluate(&records, &criteria, &sort).map_err(QueryWorkerError::from);
                // A closed reply channel means the caller abandoned the call
                let _ = reply.send(EvaluateResponse { request_id, result });
            }
            info!("query worker stopped");
        });

        Self { tx, handle }
    }

    /// Submits one filter/sort request and waits for its correlated
    /// response.
    pub async fn submit(
        &self,
        records: Vec<FlightRecord>,
        criteria: FilterCriteria,
        sort: SortSpec,
    ) -> Result<Vec<FlightRecord>, QueryWorkerError> {
        let request_id = Uuid::new_v4();
        let (reply_tx, reply_rx) = oneshot::channel();

        let job = Job {
            request: EvaluateRequest {
                request_id,
                records,
                criteria,
                sort,
            },
            reply: reply_tx,
        };
        self.tx.send(job).await.map_err(|_| QueryWorkerError::Stopped)?;

        let response = reply_rx.await.map_err(|_| QueryWorkerError::Stopped)?;
        if response.request_id != request_id {
            return Err(QueryWorkerError::Correlation {
                expected: request_id,
                got: response.request_id,
            });
        }
        response.result
    }

    /// Drains queued requests and waits for the worker task to exit.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use farelink_core::{
        CabinAmounts, CabinCounts, FlightRow, FlightStatus, PriceRange, SortField, SortOrder,
    };

    fn record(number: &str, economy_price: i64) -> FlightRecord {
        let departure = Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap();
        FlightRecord {
            flight: FlightRow {
                id: Uuid::new_v4(),
                flight_number: number.to_string(),
                airline: "UA".to_string(),
                origin: "SFO".to_string(),
                destination: "JFK".to_string(),
                departure_time: departure,
                arrival_time: departure + chrono::Duration::minutes(330),
                status: FlightStatus::Scheduled,
                prices: CabinAmounts {
                    economy: economy_price,
                    ..Default::default()
                },
            },
            seats_available: CabinCounts {
                economy: 5,
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let worker = QueryWorker::spawn(4);
        let records = vec![record("FL1", 300), record("FL2", 100)];

        let sort = SortSpec {
            field: SortField::Price,
            order: SortOrder::Asc,
        };
        let out = worker
            .submit(records, FilterCriteria::default(), sort)
            .await
            .unwrap();

        assert_eq!(out[0].flight.flight_number, "FL2");
        worker.shutdown().await;
    }

    #[tokio::test]
    async fn test_concurrent_submissions_do_not_cross_talk() {
        let worker = QueryWorker::spawn(4);
        let cheap_only = FilterCriteria {
            price_range: Some(PriceRange { min: 0, max: 200 }),
            ..Default::default()
        };
        let expensive_only = FilterCriteria {
            price_range: Some(PriceRange { min: 201, max: 10_000 }),
            ..Default::default()
        };
        let records = vec![record("CHEAP", 100), record("DEAR", 500)];

        let (cheap, dear) = tokio::join!(
            worker.submit(records.clone(), cheap_only, SortSpec::default()),
            worker.submit(records.clone(), expensive_only, SortSpec::default()),
        );

        let cheap = cheap.unwrap();
        let dear = dear.unwrap();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].flight.flight_number, "CHEAP");
        assert_eq!(dear.len(), 1);
        assert_eq!(dear[0].flight.flight_number, "DEAR");

        worker.shutdown().await;
    }

    #[tokio::test]
    async fn test_malformed_criteria_is_an_observable_error() {
        let worker = QueryWorker::spawn(4);
        let inverted = FilterCriteria {
            price_range: Some(PriceRange { min: 500, max: 100 }),
            ..Default::default()
        };

        let result = worker
            .submit(vec![record("FL1", 300)], inverted, SortSpec::default())
            .await;
        assert!(matches!(result, Err(QueryWorkerError::Criteria(_))));

        // The worker survives a bad request
        let ok = worker
            .submit(
                vec![record("FL1", 300)],
                FilterCriteria::default(),
                SortSpec::default(),
            )
            .await;
        assert!(ok.is_ok());

        worker.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_completes_after_served_requests() {
        let worker = QueryWorker::spawn(1);

        for _ in 0..3 {
            worker
                .submit(
                    vec![record("FL1", 300)],
                    FilterCriteria::default(),
                    SortSpec::default(),
                )
                .await
                .unwrap();
        }

        // Must not hang once the last sender is gone
        worker.shutdown().await;
    }
}
