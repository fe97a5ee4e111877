//! Prices

use rusty_money::{Money, iso::Currency};

use crate::tax::{CalculatedTaxCollection, TaxRuleCollection};

/// A price that has already been run through price calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedPrice<'a> {
    unit_price: Money<'a, Currency>,
    total_price: Money<'a, Currency>,
    calculated_taxes: CalculatedTaxCollection<'a>,
    tax_rules: TaxRuleCollection,
    quantity: u32,
}

impl<'a> CalculatedPrice<'a> {
    /// Creates a new calculated price for a quantity of one.
    pub fn new(
        unit_price: Money<'a, Currency>,
        total_price: Money<'a, Currency>,
        calculated_taxes: CalculatedTaxCollection<'a>,
        tax_rules: TaxRuleCollection,
    ) -> Self {
        Self {
            unit_price,
            total_price,
            calculated_taxes,
            tax_rules,
            quantity: 1,
        }
    }

    /// Creates a calculated price without taxes where unit and total price are equal.
    pub fn untaxed(price: Money<'a, Currency>) -> Self {
        Self::new(
            price,
            price,
            CalculatedTaxCollection::new(),
            TaxRuleCollection::new(),
        )
    }

    /// Sets the quantity the total price was calculated for.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Price of a single unit
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Price of all units
    pub fn total_price(&self) -> &Money<'a, Currency> {
        &self.total_price
    }

    /// Taxes included in the price
    pub fn calculated_taxes(&self) -> &CalculatedTaxCollection<'a> {
        &self.calculated_taxes
    }

    /// Tax rules the price was calculated with
    pub fn tax_rules(&self) -> &TaxRuleCollection {
        &self.tax_rules
    }

    /// Quantity the total price covers
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Currency of the total price
    pub fn currency(&self) -> &'a Currency {
        self.total_price.currency()
    }
}
