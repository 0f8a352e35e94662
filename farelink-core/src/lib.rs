pub mod cabin;
pub mod criteria;
pub mod error;
pub mod flight;
pub mod search;
pub mod source;

pub use cabin::CabinClass;
pub use criteria::{CriteriaError, FilterCriteria, PriceRange, SortField, SortOrder, SortSpec, TimeWindow};
pub use error::SearchError;
pub use flight::{CabinAmounts, CabinCounts, FlightRecord, FlightRow, FlightStatus, SeatRow, SeatStatus};
pub use search::{PassengerCounts, SearchParams, SearchResults};
pub use source::FlightDataSource;
