//! Cart Fixtures

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    cart::Cart,
    fixtures::FixtureError,
    items::LineItem,
    prices::CalculatedPrice,
    tax::{CalculatedTax, CalculatedTaxCollection, TaxRule, TaxRuleCollection},
};

/// Cart Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartFixture {
    /// Cart name
    pub name: String,

    /// Cart token
    pub token: String,

    /// ISO currency code (e.g., "GBP")
    pub currency: String,

    /// Line items, in cart order
    #[serde(default)]
    pub line_items: Vec<LineItemFixture>,
}

/// Line Item Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineItemFixture {
    /// Line item key
    pub key: String,

    /// Line item type
    #[serde(rename = "type")]
    pub kind: String,

    /// Quantity
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Whether the item is a good
    #[serde(default = "default_good")]
    pub good: bool,

    /// Total price (e.g., "2.99 GBP"); unpriced when absent
    #[serde(default)]
    pub price: Option<String>,

    /// Unit price; defaults to the total price
    #[serde(default)]
    pub unit_price: Option<String>,

    /// Tax rates the price was calculated with (e.g., "19%")
    #[serde(default)]
    pub tax_rules: Vec<String>,

    /// Taxes included in the price
    #[serde(default)]
    pub taxes: Vec<TaxFixture>,
}

/// Calculated Tax Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxFixture {
    /// Tax rate (e.g., "19%" or "0.19")
    pub rate: String,

    /// Tax amount (e.g., "0.48 GBP")
    pub tax: String,
}

fn default_quantity() -> u32 {
    1
}

fn default_good() -> bool {
    true
}

impl TryFrom<CartFixture> for Cart<'static> {
    type Error = FixtureError;

    fn try_from(fixture: CartFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;
        let mut cart = Cart::new(fixture.name, fixture.token, currency);

        for item in fixture.line_items {
            cart.add(item.try_into()?)?;
        }

        Ok(cart)
    }
}

impl TryFrom<LineItemFixture> for LineItem<'static> {
    type Error = FixtureError;

    fn try_from(fixture: LineItemFixture) -> Result<Self, Self::Error> {
        let item = LineItem::new(fixture.key, fixture.kind)
            .with_quantity(fixture.quantity)
            .with_good(fixture.good);

        let Some(price) = fixture.price else {
            return Ok(item);
        };

        let total_price = parse_money(&price)?;

        let unit_price = match fixture.unit_price {
            Some(unit_price) => parse_money(&unit_price)?,
            None => total_price,
        };

        let tax_rules = fixture
            .tax_rules
            .iter()
            .map(|rate| parse_percentage(rate).map(TaxRule::new))
            .collect::<Result<TaxRuleCollection, _>>()?;

        let taxes = fixture
            .taxes
            .iter()
            .map(|tax| {
                Ok(CalculatedTax::new(
                    parse_money(&tax.tax)?,
                    parse_percentage(&tax.rate)?,
                    total_price,
                ))
            })
            .collect::<Result<CalculatedTaxCollection<'_>, FixtureError>>()?;

        let price = CalculatedPrice::new(unit_price, total_price, taxes, tax_rules)
            .with_quantity(fixture.quantity);

        Ok(item.with_price(price))
    }
}

/// Parse an ISO currency code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] if the code is not supported.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal or is finer than a minor unit,
/// or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .filter(|value| value.fract().is_zero())
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = parse_currency(currency_code)?;

    Ok((minor_units, currency))
}

/// Parse price string (e.g., "2.99 GBP") into money.
///
/// # Errors
///
/// See [`parse_price`].
pub fn parse_money(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Parse percentage string (e.g., "15%" or "0.15") into a `Percentage`
///
/// # Errors
///
/// Returns an error if the string cannot be parsed.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();

    let value = match trimmed.strip_suffix('%') {
        Some(percent_str) => percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(|| FixtureError::InvalidPercentage(s.to_string()))?,
        None => trimmed
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?,
    };

    Ok(Percentage::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_reads_minor_units() -> Result<(), FixtureError> {
        let (minor, currency) = parse_price("270.00 GBP")?;

        assert_eq!(minor, 27_000);
        assert_eq!(currency, GBP);

        Ok(())
    }

    #[test]
    fn parse_price_accepts_negative_amounts() -> Result<(), FixtureError> {
        let (minor, _) = parse_price("-1.50 EUR")?;

        assert_eq!(minor, -150);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_sub_minor_amounts() {
        let result = parse_price("270.004 GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_accepts_trailing_zeros() -> Result<(), FixtureError> {
        let (minor, _) = parse_price("270.000 GBP")?;

        assert_eq!(minor, 27_000);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_percentage_accepts_both_formats() -> Result<(), FixtureError> {
        assert_eq!(
            parse_percentage("19%")?,
            Percentage::from(Decimal::new(19, 2))
        );
        assert_eq!(
            parse_percentage("0.07")?,
            Percentage::from(Decimal::new(7, 2))
        );

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_garbage() {
        assert!(matches!(
            parse_percentage("lots"),
            Err(FixtureError::InvalidPercentage(_))
        ));
    }
}
