pub mod availability;
pub mod clinic;
pub mod pricing;

pub use availability::{is_bookable, is_fully_booked, occupancy, AvailabilityError};
pub use clinic::{Clinic, ClinicStatus};
pub use pricing::{
    resolve_price, PricingConfig, PricingError, RateKind, RateOption, ResolvedPrice,
    StandardRates,
};
