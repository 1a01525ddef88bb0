pub mod annuity;
pub mod cash_flow;
pub mod conditions;
pub mod error;
pub mod rates;
pub mod simulation;
pub mod types;

pub use error::FinancingError;
pub use types::*;

/// Standard result type for all financing-engine operations
pub type FinancingResult<T> = Result<T, FinancingError>;
