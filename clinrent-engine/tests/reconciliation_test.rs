//! End-to-end flow: quote a booking, walk it through its lifecycle, then
//! reconcile the ledger the way the dashboards do.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use clinrent_booking::{BookingManager, BookingRequest, BookingStatus, PaymentStatus};
use clinrent_catalog::{
    Clinic, ClinicStatus, PricingConfig, RateKind, RateOption, StandardRates,
};
use clinrent_engine::{
    check_withdrawal, platform_report, provider_summary, quote_booking, BusinessRules,
    EngineError,
};
use clinrent_ledger::{FeeSchedule, Payout, PayoutStatus};
use clinrent_shared::DateRange;

fn range(from: &str, to: &str) -> DateRange {
    DateRange::new(from.parse().unwrap(), to.parse().unwrap()).unwrap()
}

fn daily_clinic(provider: Uuid, window: DateRange) -> Clinic {
    Clinic {
        id: Uuid::new_v4(),
        user_id: provider,
        name: "Riverside Clinic".to_string(),
        address: "3 Bridge Rd".to_string(),
        district: "West".to_string(),
        status: ClinicStatus::Available,
        available_date: window,
        available_hours: None,
        pricing: PricingConfig::Standard(StandardRates {
            hourly: RateOption::disabled(),
            daily: RateOption::enabled(dec!(500)),
            monthly: RateOption::disabled(),
        }),
    }
}

fn request(clinic: &Clinic, doctor: Uuid, dates: DateRange) -> BookingRequest {
    BookingRequest {
        clinic_id: clinic.id,
        doc_id: doctor,
        prov_id: clinic.user_id,
        selected_pricing: Some(RateKind::Daily),
        selected_date: dates,
        selected_hours: None,
    }
}

#[test]
fn test_quote_to_reconciliation_flow() {
    let provider = Uuid::new_v4();
    let doctor = Uuid::new_v4();
    let clinic = daily_clinic(provider, range("2024-01-01", "2024-01-31"));
    let mut manager = BookingManager::new();

    // Brand-new clinic, no bookings: any in-window range quotes fine.
    let req = request(&clinic, doctor, range("2024-01-10", "2024-01-15"));
    let quote = quote_booking(&clinic, &[], &req).unwrap();
    assert_eq!(quote.price, Some(dec!(500)));

    // The quoted price is frozen onto the booking at creation.
    let booking = manager.create(req, quote.price).unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    manager.confirm(&booking.id).unwrap();
    manager
        .set_payment_status(&booking.id, PaymentStatus::Paid)
        .unwrap();
    manager.complete(&booking.id).unwrap();

    let completed = manager.get(&booking.id).unwrap().clone();
    assert_eq!(completed.status, BookingStatus::Completed);
    assert_eq!(completed.payment_status, PaymentStatus::Paid);

    // Provider dashboard.
    let summary = provider_summary(
        provider,
        &[completed.clone()],
        &[],
        1,
        "2024-01-12".parse().unwrap(),
        &BusinessRules::default(),
    );
    assert_eq!(summary.total_earnings, dec!(500));
    assert_eq!(summary.withdrawable_balance, dec!(500));
    assert_eq!(summary.active_rental_balance, Decimal::ZERO);
    // Completed bookings no longer occupy capacity.
    assert_eq!(summary.occupancy_percent, Decimal::ZERO);

    // Admin dashboard: default 20% commission split.
    let now = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();
    let report = platform_report(&[completed.clone()], &FeeSchedule::default(), now);
    assert_eq!(report.financial.total_revenue, dec!(500));
    assert_eq!(report.financial.commission, dec!(100));
    assert_eq!(report.financial.provider_payouts, dec!(400));
    assert_eq!(report.financial.monthly_revenue, dec!(500));
    assert_eq!(report.bookings.by_status[&BookingStatus::Completed], 1);

    // Withdrawal gating against the same record set.
    assert!(check_withdrawal(&[completed.clone()], &[], dec!(500)).is_ok());
    let payout = Payout {
        id: Uuid::new_v4(),
        user_id: provider,
        amount: Some(dec!(300)),
        payment_method: "bank_transfer".to_string(),
        status: PayoutStatus::Completed,
        created_at: Utc::now(),
    };
    assert!(matches!(
        check_withdrawal(&[completed], &[payout], dec!(201)),
        Err(EngineError::InsufficientBalance { .. })
    ));
}

#[test]
fn test_partially_booked_clinic_still_quotes() {
    let provider = Uuid::new_v4();
    let clinic = daily_clinic(provider, range("2024-01-01", "2024-01-03"));
    let mut manager = BookingManager::new();

    // One pending booking covering only the first day of three.
    let first = manager
        .create(
            request(&clinic, Uuid::new_v4(), range("2024-01-01", "2024-01-01")),
            Some(dec!(500)),
        )
        .unwrap();

    // Per-day coverage rule: one free day keeps the clinic bookable, even
    // for a range overlapping the taken day.
    let quote = quote_booking(
        &clinic,
        &[first.clone()],
        &request(&clinic, Uuid::new_v4(), range("2024-01-01", "2024-01-02")),
    );
    assert!(quote.is_ok());

    // Cover the remaining days and the clinic drops out.
    let second = manager
        .create(
            request(&clinic, Uuid::new_v4(), range("2024-01-02", "2024-01-03")),
            Some(dec!(500)),
        )
        .unwrap();
    let err = quote_booking(
        &clinic,
        &[first.clone(), second],
        &request(&clinic, Uuid::new_v4(), range("2024-01-02", "2024-01-02")),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::Availability(_)));

    // Cancelled bookings release their days.
    let mut cancelled = first;
    cancelled.status = BookingStatus::Cancelled;
    assert!(quote_booking(
        &clinic,
        &[cancelled],
        &request(&clinic, Uuid::new_v4(), range("2024-01-01", "2024-01-01")),
    )
    .is_ok());
}

#[test]
fn test_percentage_clinic_flow() {
    let provider = Uuid::new_v4();
    let mut clinic = daily_clinic(provider, range("2024-01-01", "2024-01-31"));
    clinic.pricing = PricingConfig::Percentage {
        commission_percent: dec!(15),
    };

    let mut req = request(&clinic, Uuid::new_v4(), range("2024-01-05", "2024-01-06"));
    req.selected_pricing = None;

    let quote = quote_booking(&clinic, &[], &req).unwrap();
    assert_eq!(quote.price, None);

    // The booking persists without a price and never moves revenue figures
    // in this subsystem, even once completed and paid.
    let mut manager = BookingManager::new();
    let booking = manager.create(req, quote.price).unwrap();
    manager.confirm(&booking.id).unwrap();
    manager
        .set_payment_status(&booking.id, PaymentStatus::Paid)
        .unwrap();
    manager.complete(&booking.id).unwrap();

    let completed = manager.get(&booking.id).unwrap().clone();
    let now = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();
    let report = platform_report(&[completed], &FeeSchedule::default(), now);
    assert_eq!(report.financial.total_revenue, Decimal::ZERO);
    assert_eq!(report.financial.commission, Decimal::ZERO);
}

#[test]
fn test_repricing_does_not_touch_existing_bookings() {
    let provider = Uuid::new_v4();
    let mut clinic = daily_clinic(provider, range("2024-01-01", "2024-01-31"));
    let mut manager = BookingManager::new();

    let req = request(&clinic, Uuid::new_v4(), range("2024-01-10", "2024-01-11"));
    let quote = quote_booking(&clinic, &[], &req).unwrap();
    let booking = manager.create(req, quote.price).unwrap();

    // Provider raises the daily rate afterwards.
    clinic.pricing = PricingConfig::Standard(StandardRates {
        hourly: RateOption::disabled(),
        daily: RateOption::enabled(dec!(900)),
        monthly: RateOption::disabled(),
    });

    assert_eq!(manager.get(&booking.id).unwrap().price, Some(dec!(500)));
}
