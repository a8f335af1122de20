use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use clinrent_booking::{active_ranges, Booking, BookingRequest};
use clinrent_catalog::{availability, pricing, Clinic, RateKind};
use clinrent_shared::DateRange;

use crate::EngineError;

/// The answer to "can this booking happen, and for how much?". `price` is
/// `None` for percentage-model clinics, whose bookings are persisted
/// without a fixed price.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingQuote {
    pub clinic_id: Uuid,
    pub price: Option<Decimal>,
    pub selected_pricing: Option<RateKind>,
    pub selected_date: DateRange,
}

/// Validate a booking request against the clinic's availability and
/// pricing, in one pass: either every check passes and a quote comes back,
/// or nothing is applied. The caller persists the booking afterwards and
/// must re-run the availability check inside the same transaction that
/// inserts the row, since two concurrent requests can race between quote
/// and insert.
pub fn quote_booking(
    clinic: &Clinic,
    existing: &[Booking],
    request: &BookingRequest,
) -> Result<BookingQuote, EngineError> {
    if request.doc_id.is_nil() {
        return Err(EngineError::MissingField("doc_id"));
    }
    if request.prov_id.is_nil() {
        return Err(EngineError::MissingField("prov_id"));
    }
    if request.clinic_id.is_nil() {
        return Err(EngineError::MissingField("clinic_id"));
    }
    if request.clinic_id != clinic.id {
        return Err(EngineError::ClinicMismatch);
    }

    if !clinic.accepts_bookings() {
        warn!(clinic_id = %clinic.id, status = ?clinic.status, "quote rejected: clinic not available");
        return Err(EngineError::ClinicUnavailable(clinic.status));
    }

    // A misconfigured listing (enabled rate without an amount, commission
    // out of range) never quotes, regardless of what the doctor selected.
    clinic.pricing.validate()?;

    availability::is_bookable(clinic, &active_ranges(existing), &request.selected_date)?;

    let resolved = pricing::resolve_price(&clinic.pricing, request.selected_pricing)?;
    let price = resolved.fixed();

    debug!(clinic_id = %clinic.id, ?price, "booking quoted");
    Ok(BookingQuote {
        clinic_id: clinic.id,
        price,
        selected_pricing: request.selected_pricing,
        selected_date: request.selected_date,
    })
}
