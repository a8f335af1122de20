use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::models::{Booking, BookingRequest, BookingStatus, PaymentStatus};

/// Manages booking lifecycle and state transitions.
///
/// Every transition is a direct field update; all financial summaries are
/// re-derived on read, so there is no denormalized balance to keep in sync
/// here. Callers persist each accepted transition themselves and serialize
/// concurrent updates per booking id at the persistence layer.
pub struct BookingManager {
    bookings: HashMap<Uuid, Booking>,
}

impl BookingManager {
    pub fn new() -> Self {
        Self {
            bookings: HashMap::new(),
        }
    }

    /// Create a booking in `Pending` with the price frozen as resolved by
    /// the caller (`None` for percentage-model clinics).
    pub fn create(
        &mut self,
        request: BookingRequest,
        price: Option<Decimal>,
    ) -> Result<Booking, BookingError> {
        if request.doc_id.is_nil() {
            return Err(BookingError::MissingField("doc_id"));
        }
        if request.prov_id.is_nil() {
            return Err(BookingError::MissingField("prov_id"));
        }
        if request.clinic_id.is_nil() {
            return Err(BookingError::MissingField("clinic_id"));
        }
        if request.selected_date.from > request.selected_date.to {
            return Err(BookingError::InvalidDateRange);
        }

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            clinic_id: request.clinic_id,
            doc_id: request.doc_id,
            prov_id: request.prov_id,
            price,
            selected_pricing: request.selected_pricing,
            selected_date: request.selected_date,
            selected_hours: request.selected_hours,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            platform_fee: None,
            provider_share: None,
            platform_fee_percentage: None,
            created_at: now,
            updated_at: now,
        };

        info!(booking_id = %booking.id, clinic_id = %booking.clinic_id, "booking created");
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    pub fn get(&self, booking_id: &Uuid) -> Option<&Booking> {
        self.bookings.get(booking_id)
    }

    /// Transition: Pending -> Confirmed (provider/admin accepts).
    pub fn confirm(&mut self, booking_id: &Uuid) -> Result<(), BookingError> {
        self.transition(booking_id, BookingStatus::Confirmed, |from| {
            from == BookingStatus::Pending
        })
    }

    /// Transition into Busy: funds reserved, rental in progress.
    pub fn mark_busy(&mut self, booking_id: &Uuid) -> Result<(), BookingError> {
        self.transition(booking_id, BookingStatus::Busy, |from| {
            matches!(from, BookingStatus::Pending | BookingStatus::Confirmed)
        })
    }

    /// Transition to Completed, the unit counted in earnings aggregation.
    pub fn complete(&mut self, booking_id: &Uuid) -> Result<(), BookingError> {
        self.transition(booking_id, BookingStatus::Completed, |from| {
            matches!(from, BookingStatus::Confirmed | BookingStatus::Busy)
        })
    }

    /// Cancellation by the doctor or provider. Does not touch
    /// `payment_status`; refunds are external.
    pub fn cancel(&mut self, booking_id: &Uuid) -> Result<(), BookingError> {
        self.transition(booking_id, BookingStatus::Cancelled, |from| {
            matches!(from, BookingStatus::Pending | BookingStatus::Confirmed)
        })
    }

    /// Administrator override: cancel from any non-terminal state.
    pub fn force_cancel(&mut self, booking_id: &Uuid) -> Result<(), BookingError> {
        self.transition(booking_id, BookingStatus::Cancelled, |from| {
            !from.is_terminal()
        })
    }

    /// Payment state is tracked independently of the booking status.
    pub fn set_payment_status(
        &mut self,
        booking_id: &Uuid,
        payment_status: PaymentStatus,
    ) -> Result<(), BookingError> {
        let booking = self.get_booking_mut(booking_id)?;
        booking.payment_status = payment_status;
        booking.updated_at = Utc::now();
        Ok(())
    }

    fn transition(
        &mut self,
        booking_id: &Uuid,
        to: BookingStatus,
        legal_from: impl Fn(BookingStatus) -> bool,
    ) -> Result<(), BookingError> {
        let booking = self.get_booking_mut(booking_id)?;

        if !legal_from(booking.status) {
            return Err(BookingError::InvalidTransition {
                from: booking.status,
                to,
            });
        }

        let from = booking.status;
        booking.update_status(to);
        info!(booking_id = %booking_id, ?from, ?to, "booking transition");
        Ok(())
    }

    fn get_booking_mut(&mut self, booking_id: &Uuid) -> Result<&mut Booking, BookingError> {
        self.bookings
            .get_mut(booking_id)
            .ok_or(BookingError::NotFound(*booking_id))
    }
}

impl Default for BookingManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("booking not found: {0}")]
    NotFound(Uuid),

    #[error("missing required booking field: {0}")]
    MissingField(&'static str),

    #[error("invalid state transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("selected date range is inverted")]
    InvalidDateRange,
}
