pub mod alerts;
pub mod error;
pub mod format;
pub mod insights;
pub mod metrics;
pub mod report;
pub mod risk;
pub mod scorecard;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::FinsightError;
pub use types::*;

/// Standard result type for all finsight operations
pub type FinsightResult<T> = Result<T, FinsightError>;
