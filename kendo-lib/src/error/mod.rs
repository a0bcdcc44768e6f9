//! Error types

mod decimal;
mod helper;

pub use decimal::*;
pub use helper::*;

/// Any error raised by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Helper construction, configuration or forwarding failed.
    #[error(transparent)]
    Helper(#[from] HelperError),

    /// A decimal value could not be converted.
    #[error(transparent)]
    Decimal(#[from] DecimalError),
}
