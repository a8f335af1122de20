use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clinrent_catalog::RateKind;
use clinrent_shared::{DateRange, HourWindow};

/// Booking status in the lifecycle. `Busy` marks an in-progress rental
/// whose funds are reserved but not yet earned; it is a parallel branch,
/// not a step between confirmed and completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    // Legacy rows sometimes spell this "unconfirmed".
    #[serde(alias = "unconfirmed")]
    Pending,
    Confirmed,
    Busy,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Whether a booking in this status claims clinic capacity, for both
    /// day-coverage availability and occupancy reporting.
    pub fn occupies_slot(&self) -> bool {
        matches!(
            self,
            BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::Busy
        )
    }
}

/// Payment state, maintained independently of the booking status. Refunds
/// are handled outside this subsystem; cancelling a booking never flips
/// this field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

/// A doctor-to-clinic reservation. `price` is resolved at creation and
/// frozen; re-pricing a clinic never touches existing rows. Percentage-model
/// clinics produce bookings with no price at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub doc_id: Uuid,
    pub prov_id: Uuid,
    pub price: Option<Decimal>,
    pub selected_pricing: Option<RateKind>,
    pub selected_date: DateRange,
    pub selected_hours: Option<HourWindow>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    /// Fee figures stamped at completion time, when present. Reporting
    /// prefers these over the current platform fee so an admin fee change
    /// only affects future completions.
    #[serde(default)]
    pub platform_fee: Option<Decimal>,
    #[serde(default)]
    pub provider_share: Option<Decimal>,
    #[serde(default)]
    pub platform_fee_percentage: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn update_status(&mut self, new_status: BookingStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }
}

/// What the booking flow submits before a price exists.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub clinic_id: Uuid,
    pub doc_id: Uuid,
    pub prov_id: Uuid,
    pub selected_pricing: Option<RateKind>,
    pub selected_date: DateRange,
    pub selected_hours: Option<HourWindow>,
}

/// Selected ranges of the bookings that still claim capacity, the input
/// shape the availability checker works over.
pub fn active_ranges(bookings: &[Booking]) -> Vec<DateRange> {
    bookings
        .iter()
        .filter(|b| b.status.occupies_slot())
        .map(|b| b.selected_date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_unconfirmed_reads_as_pending() {
        let status: BookingStatus = serde_json::from_str("\"unconfirmed\"").unwrap();
        assert_eq!(status, BookingStatus::Pending);
        assert!(status.occupies_slot());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Busy.is_terminal());
        assert!(!BookingStatus::Completed.occupies_slot());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Unpaid).unwrap(),
            "\"unpaid\""
        );
    }
}
