pub mod availability;
pub mod evaluate;
pub mod orchestrator;
pub mod worker;

pub use availability::aggregate_availability;
pub use evaluate::evaluate;
pub use orchestrator::SearchOrchestrator;
pub use worker::{QueryWorker, QueryWorkerError};
