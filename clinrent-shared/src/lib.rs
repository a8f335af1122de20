pub mod money;
pub mod range;

pub use range::{DateRange, HourWindow, RangeError};
