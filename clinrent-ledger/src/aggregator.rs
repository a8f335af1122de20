//! Read-time aggregation over bookings, payouts, and transactions.
//!
//! Every figure is a pure fold over the record set the caller fetched; no
//! running balances are kept anywhere. Missing `price`/`amount` fields on
//! historical rows coalesce to zero so reporting stays available with
//! incomplete legacy data. New writes are validated at creation time and
//! never rely on this leniency.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use clinrent_booking::{Booking, BookingStatus, PaymentStatus};
use clinrent_shared::money;

use crate::models::{FeeSchedule, Payout, Transaction};

/// Total earnings: prices of the provider's completed bookings.
pub fn total_earnings(bookings: &[Booking]) -> Decimal {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .map(|b| money::or_zero(b.price))
        .sum()
}

/// Funds tied up in active rentals: prices of busy bookings. This is the
/// reporting-path view of "outstanding balance"; the payouts-path view is
/// [`withdrawable_balance`]. The two answer different questions and stay
/// separate.
pub fn active_rental_balance(bookings: &[Booking]) -> Decimal {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Busy)
        .map(|b| money::or_zero(b.price))
        .sum()
}

/// Settled payout total: approved and completed withdrawals.
pub fn total_payouts(payouts: &[Payout]) -> Decimal {
    payouts
        .iter()
        .filter(|p| p.status.is_settled())
        .map(|p| money::or_zero(p.amount))
        .sum()
}

/// Funds available to withdraw: completed earnings minus settled payouts,
/// floored at zero. Settled payouts exceeding earnings should not occur,
/// but the aggregator stays defensive rather than reporting a negative
/// balance.
pub fn withdrawable_balance(bookings: &[Booking], payouts: &[Payout]) -> Decimal {
    (total_earnings(bookings) - total_payouts(payouts)).max(Decimal::ZERO)
}

/// Platform-wide financial figures over completed, paid bookings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FinancialStats {
    pub total_revenue: Decimal,
    pub commission: Decimal,
    pub provider_payouts: Decimal,
    /// Revenue restricted to bookings created in the calendar month of the
    /// reporting instant.
    pub monthly_revenue: Decimal,
}

pub fn financial_stats(
    bookings: &[Booking],
    fees: &FeeSchedule,
    now: DateTime<Utc>,
) -> FinancialStats {
    let mut stats = FinancialStats {
        total_revenue: Decimal::ZERO,
        commission: Decimal::ZERO,
        provider_payouts: Decimal::ZERO,
        monthly_revenue: Decimal::ZERO,
    };

    for booking in bookings {
        if booking.status != BookingStatus::Completed
            || booking.payment_status != PaymentStatus::Paid
        {
            continue;
        }

        let price = money::or_zero(booking.price);
        // A rate stamped at completion time wins over the current setting.
        let fee_percent = booking
            .platform_fee_percentage
            .unwrap_or(fees.platform_fee_percentage);

        let commission = booking
            .platform_fee
            .unwrap_or_else(|| money::percent_of(price, fee_percent));
        let provider_share = booking
            .provider_share
            .unwrap_or_else(|| money::percent_of(price, Decimal::ONE_HUNDRED - fee_percent));

        stats.total_revenue += price;
        stats.commission += commission;
        stats.provider_payouts += provider_share;

        if booking.created_at.year() == now.year() && booking.created_at.month() == now.month() {
            stats.monthly_revenue += price;
        }
    }

    stats
}

/// Booking counts grouped by status and by payment status.
#[derive(Debug, Clone, Serialize, Default)]
pub struct BookingStats {
    pub total: usize,
    pub by_status: HashMap<BookingStatus, usize>,
    pub by_payment_status: HashMap<PaymentStatus, usize>,
}

pub fn booking_stats(bookings: &[Booking]) -> BookingStats {
    let mut stats = BookingStats {
        total: bookings.len(),
        ..Default::default()
    };
    for booking in bookings {
        *stats.by_status.entry(booking.status).or_insert(0) += 1;
        *stats
            .by_payment_status
            .entry(booking.payment_status)
            .or_insert(0) += 1;
    }
    stats
}

/// One presentable history row, amounts already coalesced.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerLine {
    pub id: Uuid,
    pub rental_id: Option<Uuid>,
    pub tx_type: crate::models::TransactionType,
    pub amount: Decimal,
    pub status: crate::models::TransactionStatus,
    pub created_at: DateTime<Utc>,
}

/// A user's transaction history, newest first.
pub fn transaction_history(transactions: &[Transaction], user_id: Uuid) -> Vec<LedgerLine> {
    let mut lines: Vec<LedgerLine> = transactions
        .iter()
        .filter(|t| t.user_id == user_id)
        .map(|t| LedgerLine {
            id: t.id,
            rental_id: t.rental_id,
            tx_type: t.tx_type,
            amount: money::or_zero(t.amount),
            status: t.status,
            created_at: t.created_at,
        })
        .collect();
    lines.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    lines
}
