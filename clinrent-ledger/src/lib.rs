pub mod aggregator;
pub mod models;

pub use aggregator::{
    active_rental_balance, booking_stats, financial_stats, total_earnings, total_payouts,
    transaction_history, withdrawable_balance, BookingStats, FinancialStats, LedgerLine,
};
pub use models::{FeeSchedule, Payout, PayoutStatus, Transaction, TransactionStatus, TransactionType};
