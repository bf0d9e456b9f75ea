//! Tethys I/O edges: loading hourly sea level records, persisting fitted
//! parameters between pipeline stages, and exporting results as CSV.
//!
//! Everything here is an adapter. The numerical crates pass data in
//! memory; files only appear where a record enters the pipeline, where
//! the fit/predict hand-off is persisted, and where tables leave it.

mod error;
mod params;
mod reader;
mod timestamp;
mod writer;

pub use error::IoError;
pub use params::{load_fit, save_fit};
pub use reader::{fill_gaps, read_series};
pub use timestamp::TimeIndex;
pub use writer::{write_constituents, write_events, write_surge_series, write_tide_series};
