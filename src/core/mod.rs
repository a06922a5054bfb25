pub mod error;
pub mod types;

pub use types::{Meter, MetricDeltas};
