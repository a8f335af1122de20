use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pricing label a doctor selects when booking a standard-model clinic.
/// Wire values match the labels the dashboards store verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RateKind {
    #[serde(rename = "Hourly Rate")]
    Hourly,
    #[serde(rename = "Daily Rate")]
    Daily,
    #[serde(rename = "Monthly Rate")]
    Monthly,
}

impl std::fmt::Display for RateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RateKind::Hourly => "Hourly Rate",
            RateKind::Daily => "Daily Rate",
            RateKind::Monthly => "Monthly Rate",
        };
        f.write_str(label)
    }
}

/// One toggleable rate under the standard pricing model. `amount` is
/// nullable to tolerate historical rows; an enabled rate without a usable
/// amount is rejected at resolution time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateOption {
    pub enabled: bool,
    pub amount: Option<Decimal>,
}

impl RateOption {
    pub fn enabled(amount: Decimal) -> Self {
        Self {
            enabled: true,
            amount: Some(amount),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            amount: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandardRates {
    pub hourly: RateOption,
    pub daily: RateOption,
    pub monthly: RateOption,
}

impl StandardRates {
    fn rate(&self, kind: RateKind) -> &RateOption {
        match kind {
            RateKind::Hourly => &self.hourly,
            RateKind::Daily => &self.daily,
            RateKind::Monthly => &self.monthly,
        }
    }
}

/// A clinic prices either by flat rates or by taking a commission
/// percentage of the transacted amount. Exactly one model per clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "pricingModel", rename_all = "lowercase")]
pub enum PricingConfig {
    Standard(StandardRates),
    Percentage {
        #[serde(rename = "commissionPercent")]
        commission_percent: Decimal,
    },
}

impl PricingConfig {
    /// Enabled rates must carry a non-negative amount, commission
    /// percentages must be within 0..=100. Run at clinic create/edit time
    /// and again by the quote path before resolving a price.
    pub fn validate(&self) -> Result<(), PricingError> {
        match self {
            PricingConfig::Standard(rates) => {
                for kind in [RateKind::Hourly, RateKind::Daily, RateKind::Monthly] {
                    let rate = rates.rate(kind);
                    if !rate.enabled {
                        continue;
                    }
                    match rate.amount {
                        Some(amount) if amount >= Decimal::ZERO => {}
                        _ => return Err(PricingError::InvalidRate(kind)),
                    }
                }
                Ok(())
            }
            PricingConfig::Percentage { commission_percent } => {
                if *commission_percent < Decimal::ZERO
                    || *commission_percent > Decimal::ONE_HUNDRED
                {
                    return Err(PricingError::InvalidCommission(*commission_percent));
                }
                Ok(())
            }
        }
    }
}

/// Outcome of price resolution. Percentage clinics have no fixed price at
/// booking time; the platform computes its cut later from the transacted
/// amount, so those bookings persist with `price = None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedPrice {
    Fixed(Decimal),
    CommissionBased,
}

impl ResolvedPrice {
    pub fn fixed(&self) -> Option<Decimal> {
        match self {
            ResolvedPrice::Fixed(amount) => Some(*amount),
            ResolvedPrice::CommissionBased => None,
        }
    }
}

/// Resolve the price to charge for a booking. Pure function of the clinic's
/// pricing configuration and the doctor's selected rate label.
pub fn resolve_price(
    pricing: &PricingConfig,
    selected: Option<RateKind>,
) -> Result<ResolvedPrice, PricingError> {
    match pricing {
        PricingConfig::Percentage { .. } => match selected {
            // Commission clinics carry no rate label; supplying one means
            // the caller is confused about the pricing model.
            None => Ok(ResolvedPrice::CommissionBased),
            Some(kind) => Err(PricingError::RateOnCommissionClinic(kind)),
        },
        PricingConfig::Standard(rates) => {
            let kind = selected.ok_or(PricingError::MissingRateSelection)?;
            let rate = rates.rate(kind);
            if !rate.enabled {
                return Err(PricingError::RateNotEnabled(kind));
            }
            match rate.amount {
                Some(amount) if amount >= Decimal::ZERO => Ok(ResolvedPrice::Fixed(amount)),
                _ => Err(PricingError::InvalidRate(kind)),
            }
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("standard-model clinic requires a rate selection")]
    MissingRateSelection,

    #[error("{0} is not enabled on this clinic")]
    RateNotEnabled(RateKind),

    #[error("{0} has no usable amount configured")]
    InvalidRate(RateKind),

    #[error("commission-model clinic does not accept a rate selection ({0})")]
    RateOnCommissionClinic(RateKind),

    #[error("commission percentage out of range: {0}")]
    InvalidCommission(Decimal),
}
