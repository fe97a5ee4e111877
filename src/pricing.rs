//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};

use crate::prices::CalculatedPrice;

/// Sums the total prices of calculated prices, starting from zero in `currency`.
///
/// # Errors
///
/// Returns a [`MoneyError`] if a price is in a different currency.
pub fn total_price<'a, 'p, I>(
    prices: I,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, MoneyError>
where
    'a: 'p,
    I: IntoIterator<Item = &'p CalculatedPrice<'a>>,
{
    prices
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, price| {
            acc.add(*price.total_price())
        })
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_total_price() -> TestResult {
        let prices = [
            CalculatedPrice::untaxed(Money::from_minor(100, USD)),
            CalculatedPrice::untaxed(Money::from_minor(200, USD)),
        ];

        assert_eq!(total_price(&prices, USD)?, Money::from_minor(300, USD));

        Ok(())
    }

    #[test]
    fn test_total_price_empty_is_zero() -> TestResult {
        let prices: [CalculatedPrice<'static>; 0] = [];

        assert_eq!(total_price(&prices, GBP)?, Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn test_total_price_currency_mismatch() {
        let prices = [CalculatedPrice::untaxed(Money::from_minor(100, USD))];

        assert!(total_price(&prices, GBP).is_err());
    }
}
