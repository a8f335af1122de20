use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use clinrent_booking::Booking;
use clinrent_catalog::availability;
use clinrent_ledger::{aggregator, FeeSchedule, Payout};

use crate::config::BusinessRules;
use crate::EngineError;

/// What a provider's dashboard shows. The two outstanding-balance figures
/// answer different questions and are deliberately not unified: funds tied
/// up in active rentals vs funds available to withdraw.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProviderSummary {
    pub provider_id: Uuid,
    pub total_earnings: Decimal,
    pub active_rental_balance: Decimal,
    pub withdrawable_balance: Decimal,
    pub total_payouts: Decimal,
    pub occupancy_percent: Decimal,
}

/// Fold a provider's records into their dashboard figures. Pure over the
/// given record set; callers re-run it after the underlying data changes.
pub fn provider_summary(
    provider_id: Uuid,
    bookings: &[Booking],
    payouts: &[Payout],
    clinics_owned: usize,
    today: NaiveDate,
    rules: &BusinessRules,
) -> ProviderSummary {
    let own_bookings: Vec<Booking> = bookings
        .iter()
        .filter(|b| b.prov_id == provider_id)
        .cloned()
        .collect();
    let own_payouts: Vec<Payout> = payouts
        .iter()
        .filter(|p| p.user_id == provider_id)
        .cloned()
        .collect();

    let active_today = own_bookings
        .iter()
        .filter(|b| b.status.occupies_slot() && b.selected_date.contains(today))
        .count();

    ProviderSummary {
        provider_id,
        total_earnings: aggregator::total_earnings(&own_bookings),
        active_rental_balance: aggregator::active_rental_balance(&own_bookings),
        withdrawable_balance: aggregator::withdrawable_balance(&own_bookings, &own_payouts),
        total_payouts: aggregator::total_payouts(&own_payouts),
        occupancy_percent: availability::occupancy(
            active_today,
            clinics_owned,
            rules.working_hours_per_clinic,
        ),
    }
}

/// Platform-wide admin report.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub financial: aggregator::FinancialStats,
    pub bookings: aggregator::BookingStats,
    pub generated_at: DateTime<Utc>,
}

pub fn platform_report(
    bookings: &[Booking],
    fees: &FeeSchedule,
    now: DateTime<Utc>,
) -> PlatformReport {
    PlatformReport {
        financial: aggregator::financial_stats(bookings, fees, now),
        bookings: aggregator::booking_stats(bookings),
        generated_at: now,
    }
}

/// Gate a withdrawal request: settled payouts must never exceed completed
/// earnings, so a request is approvable only up to the withdrawable
/// balance.
pub fn check_withdrawal(
    bookings: &[Booking],
    payouts: &[Payout],
    requested: Decimal,
) -> Result<(), EngineError> {
    if requested <= Decimal::ZERO {
        return Err(EngineError::InvalidWithdrawalAmount(requested));
    }

    let available = aggregator::withdrawable_balance(bookings, payouts);
    if requested > available {
        warn!(%requested, %available, "withdrawal rejected");
        return Err(EngineError::InsufficientBalance {
            requested,
            available,
        });
    }
    Ok(())
}
