use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use clinrent_ledger::FeeSchedule;

/// Platform business rules, read from the settings store the host exposes.
/// The engine consumes these values; administrators own them.
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Commission retained by the platform on completed bookings, applied
    /// when a booking carries no stamped fee of its own.
    #[serde(default = "default_fee_percentage")]
    pub platform_fee_percentage: Decimal,
    /// Assumed bookable hours per clinic per day, the occupancy divisor.
    #[serde(default = "default_working_hours")]
    pub working_hours_per_clinic: u32,
}

fn default_fee_percentage() -> Decimal {
    dec!(20)
}

fn default_working_hours() -> u32 {
    8
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            platform_fee_percentage: default_fee_percentage(),
            working_hours_per_clinic: default_working_hours(),
        }
    }
}

impl BusinessRules {
    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            platform_fee_percentage: self.platform_fee_percentage,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlatformConfig {
    #[serde(default)]
    pub business_rules: BusinessRules,
}

impl PlatformConfig {
    /// Layered load: optional config files, then `CLINRENT__`-prefixed
    /// environment variables. Everything falls back to documented defaults
    /// (20% fee, 8 working hours).
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CLINRENT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
