use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clinrent_shared::{DateRange, HourWindow};

use crate::pricing::PricingConfig;

/// Clinic listing status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClinicStatus {
    Available,
    Unavailable,
    Pending,
    Suspended,
}

/// A rentable clinic owned by a provider. Never hard-deleted: retiring a
/// listing is a status transition to `Suspended` or `Unavailable`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: Uuid,
    /// Owning provider.
    pub user_id: Uuid,
    pub name: String,
    pub address: String,
    pub district: String,
    pub status: ClinicStatus,
    /// The window during which the clinic accepts bookings.
    pub available_date: DateRange,
    /// Daily opening hours; `None` means open all day.
    pub available_hours: Option<HourWindow>,
    pub pricing: PricingConfig,
}

impl Clinic {
    pub fn accepts_bookings(&self) -> bool {
        self.status == ClinicStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{RateOption, StandardRates};
    use rust_decimal_macros::dec;

    #[test]
    fn test_clinic_wire_format() {
        let clinic = Clinic {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Harbor Dental".to_string(),
            address: "12 Quay St".to_string(),
            district: "Central".to_string(),
            status: ClinicStatus::Available,
            available_date: DateRange::new(
                "2024-01-01".parse().unwrap(),
                "2024-01-31".parse().unwrap(),
            )
            .unwrap(),
            available_hours: None,
            pricing: PricingConfig::Standard(StandardRates {
                hourly: RateOption::disabled(),
                daily: RateOption::enabled(dec!(100)),
                monthly: RateOption::disabled(),
            }),
        };

        let json = serde_json::to_value(&clinic).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["pricing"]["pricingModel"], "standard");
        assert!(json["availableDate"]["from"].is_string());
    }
}
