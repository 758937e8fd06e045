pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "certificate")]
pub mod certificate;

#[cfg(feature = "interactive")]
pub mod field;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
