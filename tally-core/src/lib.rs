//! tally-core: record schema, error types and filtering shared by the Tally pipeline

pub mod error;
pub mod filter;
pub mod record;

pub use error::{Error, Result, SchemaError};
pub use filter::{Filter, FilterOptions};
pub use record::{RecordSet, TransactionRecord, TxnType, title_case};
