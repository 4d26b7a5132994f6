pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod record;
pub mod sort;
pub mod source;

pub use aggregate::{aggregate, AggregationResult, Granularity, ProductTotal, TrendPoint};
pub use error::FetchError;
pub use filter::{filter_by_date, filter_by_name, DateFilter};
pub use record::{DateWindow, SalesRecord};
pub use sort::{sort_records, SortDirection, SortField};
pub use source::RecordSource;
