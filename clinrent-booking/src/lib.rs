pub mod manager;
pub mod models;

pub use manager::{BookingError, BookingManager};
pub use models::{active_ranges, Booking, BookingRequest, BookingStatus, PaymentStatus};
