pub mod fetch;
pub mod models;
pub mod output;
pub mod readings;
pub mod snapshot;
pub mod units;

pub use fetch::{poll, FetchError};
pub use output::{console_line, LineStyle};
pub use readings::{Readings, Trend};
pub use snapshot::{SnapshotError, StationSnapshot};
pub use units::Units;
