use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payout request status. Some historical rows spell `approved` as
/// `confirmed`; both count toward settled payouts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Pending,
    #[serde(alias = "confirmed")]
    Approved,
    Rejected,
    Completed,
}

impl PayoutStatus {
    /// Statuses that count against a provider's earned balance.
    pub fn is_settled(&self) -> bool {
        matches!(self, PayoutStatus::Approved | PayoutStatus::Completed)
    }
}

/// A provider's withdrawal request against accumulated earnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Option<Decimal>,
    pub payment_method: String,
    pub status: PayoutStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Earning,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Rejected,
}

/// Ledger row reconstructing a user's history independently of the payout
/// table. Earning rows reference the rental; withdrawal rows do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rental_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: Option<Decimal>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

/// Platform commission configuration, consumed by the aggregator rather
/// than owned by it. Administrators change the percentage through the
/// settings store; completed bookings keep whatever rate was stamped on
/// them at completion time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub platform_fee_percentage: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            platform_fee_percentage: dec!(20),
        }
    }
}
