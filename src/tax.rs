//! Taxes
//!
//! Tax data carried on calculated prices. Taxes arrive already calculated; nothing here
//! derives a tax from a price.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;

/// A tax rate applied to a share of a price.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRule {
    /// Tax rate as a fraction (e.g. 0.19 for 19%)
    tax_rate: Percentage,

    /// Share of the price the rate applies to, in percent points
    share: Decimal,
}

impl TaxRule {
    /// Create a tax rule covering the full price.
    pub fn new(tax_rate: Percentage) -> Self {
        Self::with_share(tax_rate, Decimal::ONE_HUNDRED)
    }

    /// Create a tax rule covering `share` percent of the price.
    pub fn with_share(tax_rate: Percentage, share: Decimal) -> Self {
        Self { tax_rate, share }
    }

    /// Tax rate
    pub fn tax_rate(&self) -> &Percentage {
        &self.tax_rate
    }

    /// Share of the price, in percent points
    pub fn share(&self) -> Decimal {
        self.share
    }
}

/// A tax amount that was calculated for a price.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedTax<'a> {
    tax: Money<'a, Currency>,
    tax_rate: Percentage,
    price: Money<'a, Currency>,
}

impl<'a> CalculatedTax<'a> {
    /// Create a calculated tax.
    pub fn new(tax: Money<'a, Currency>, tax_rate: Percentage, price: Money<'a, Currency>) -> Self {
        Self {
            tax,
            tax_rate,
            price,
        }
    }

    /// Tax amount
    pub fn tax(&self) -> &Money<'a, Currency> {
        &self.tax
    }

    /// Rate the tax was calculated with
    pub fn tax_rate(&self) -> &Percentage {
        &self.tax_rate
    }

    /// Price the tax was calculated on
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}

/// Tax rules attached to a price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxRuleCollection {
    rules: SmallVec<[TaxRule; 2]>,
}

impl TaxRuleCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule.
    pub fn push(&mut self, rule: TaxRule) {
        self.rules.push(rule);
    }

    /// Iterate the rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TaxRule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<TaxRule> for TaxRuleCollection {
    fn from_iter<I: IntoIterator<Item = TaxRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Taxes calculated for a price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatedTaxCollection<'a> {
    taxes: SmallVec<[CalculatedTax<'a>; 2]>,
}

impl<'a> CalculatedTaxCollection<'a> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a calculated tax.
    pub fn push(&mut self, tax: CalculatedTax<'a>) {
        self.taxes.push(tax);
    }

    /// Iterate the taxes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CalculatedTax<'a>> {
        self.taxes.iter()
    }

    /// Number of taxes
    pub fn len(&self) -> usize {
        self.taxes.len()
    }

    /// Whether there are no taxes
    pub fn is_empty(&self) -> bool {
        self.taxes.is_empty()
    }

    /// Sum of all tax amounts, zero in `currency` when empty.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if a tax is in a different currency.
    pub fn amount(&self, currency: &'a Currency) -> Result<Money<'a, Currency>, MoneyError> {
        self.taxes
            .iter()
            .try_fold(Money::from_minor(0, currency), |acc, tax| acc.add(*tax.tax()))
    }
}

impl<'a> FromIterator<CalculatedTax<'a>> for CalculatedTaxCollection<'a> {
    fn from_iter<I: IntoIterator<Item = CalculatedTax<'a>>>(iter: I) -> Self {
        Self {
            taxes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn tax_rule_defaults_to_full_share() {
        let rule = TaxRule::new(Percentage::from(0.19));

        assert_eq!(rule.share(), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn empty_tax_collection_amount_is_zero() -> TestResult {
        let taxes = CalculatedTaxCollection::new();

        assert_eq!(taxes.amount(GBP)?, Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn tax_collection_amount_sums_taxes() -> TestResult {
        let taxes: CalculatedTaxCollection<'_> = [
            CalculatedTax::new(
                Money::from_minor(1_900, GBP),
                Percentage::from(0.19),
                Money::from_minor(10_000, GBP),
            ),
            CalculatedTax::new(
                Money::from_minor(350, GBP),
                Percentage::from(0.07),
                Money::from_minor(5_000, GBP),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(taxes.len(), 2);
        assert_eq!(taxes.amount(GBP)?, Money::from_minor(2_250, GBP));

        Ok(())
    }

    #[test]
    fn tax_collection_amount_rejects_mixed_currencies() {
        let taxes: CalculatedTaxCollection<'_> = [CalculatedTax::new(
            Money::from_minor(100, USD),
            Percentage::from(0.1),
            Money::from_minor(1_000, USD),
        )]
        .into_iter()
        .collect();

        assert!(taxes.amount(GBP).is_err());
    }
}
