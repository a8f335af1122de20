pub mod config;
pub mod quote;
pub mod reconciliation;

pub use config::{BusinessRules, PlatformConfig};
pub use quote::{quote_booking, BookingQuote};
pub use reconciliation::{
    check_withdrawal, platform_report, provider_summary, PlatformReport, ProviderSummary,
};

use rust_decimal::Decimal;

use clinrent_booking::BookingError;
use clinrent_catalog::{AvailabilityError, ClinicStatus, PricingError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("missing required booking field: {0}")]
    MissingField(&'static str),

    #[error("clinic is not accepting bookings (status {0:?})")]
    ClinicUnavailable(ClinicStatus),

    #[error("booking does not belong to this clinic")]
    ClinicMismatch,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Availability(#[from] AvailabilityError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("withdrawal amount must be positive: {0}")]
    InvalidWithdrawalAmount(Decimal),

    #[error("withdrawal of {requested} exceeds withdrawable balance of {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },
}
