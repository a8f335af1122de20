use rust_decimal::Decimal;

/// Historical records may be missing monetary fields entirely. Aggregation
/// treats those as zero rather than failing; this is the one place the
/// coalescing happens.
pub fn or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

/// `percent` of `amount`, exact decimal arithmetic.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_or_zero() {
        assert_eq!(or_zero(None), Decimal::ZERO);
        assert_eq!(or_zero(Some(dec!(12.50))), dec!(12.50));
    }

    #[test]
    fn test_percent_of_is_exact() {
        assert_eq!(percent_of(dec!(500), dec!(20)), dec!(100));
        assert_eq!(percent_of(dec!(0.30), dec!(10)), dec!(0.030));
    }
}
