//! Fixtures
//!
//! YAML descriptions of carts, used by the command line tool and tests.

use std::{fs, path::Path};

use thiserror::Error;
use tracing::debug;

use crate::cart::{Cart, CartError};

pub mod carts;

pub use carts::{CartFixture, LineItemFixture, TaxFixture};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Cart creation error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// Parse a cart from fixture YAML.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or describes an invalid cart.
pub fn cart_from_yaml_str(yaml: &str) -> Result<Cart<'static>, FixtureError> {
    let fixture: CartFixture = serde_norway::from_str(yaml)?;

    fixture.try_into()
}

/// Load a cart from a fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or describes an invalid cart.
pub fn load_cart(path: impl AsRef<Path>) -> Result<Cart<'static>, FixtureError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let cart = cart_from_yaml_str(&contents)?;

    debug!(
        path = %path.display(),
        cart = cart.name(),
        line_items = cart.len(),
        "loaded cart fixture"
    );

    Ok(cart)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rusty_money::{Money, iso::GBP};
    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use crate::{items::LineItem, prices::CalculatedPrice};

    use super::*;

    const CART_YAML: &str = r#"
name: test
token: test
currency: GBP
line_items:
  - key: a
    type: product
    price: "270.00 GBP"
  - key: b
    type: product
    quantity: 2
    price: "10.00 GBP"
    unit_price: "5.00 GBP"
    tax_rules: ["20%"]
    taxes:
      - rate: "20%"
        tax: "1.67 GBP"
  - key: voucher
    type: promotion
    good: false
    price: "-5.00 GBP"
"#;

    #[test]
    fn parses_cart() -> TestResult {
        let cart = cart_from_yaml_str(CART_YAML)?;

        assert_eq!(cart.name(), "test");
        assert_eq!(cart.currency(), GBP);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.goods_count(), 3);
        assert_eq!(cart.goods_price()?, Money::from_minor(28_000, GBP));

        let taxed = cart.get("b").and_then(LineItem::price);

        assert_eq!(
            taxed.map(CalculatedPrice::unit_price),
            Some(&Money::from_minor(500, GBP))
        );
        assert_eq!(taxed.map(|price| price.tax_rules().len()), Some(1));
        assert_eq!(
            taxed
                .map(|price| price.calculated_taxes().amount(GBP))
                .transpose()?,
            Some(Money::from_minor(167, GBP))
        );

        Ok(())
    }

    #[test]
    fn empty_cart_fixture() -> TestResult {
        let cart = cart_from_yaml_str("name: empty\ntoken: empty\ncurrency: EUR")?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn rejects_mismatched_item_currency() {
        let result = cart_from_yaml_str(
            r#"
name: test
token: test
currency: GBP
line_items:
  - key: a
    type: product
    price: "1.00 USD"
"#,
        );

        assert!(matches!(
            result,
            Err(FixtureError::Cart(CartError::CurrencyMismatch(..)))
        ));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = cart_from_yaml_str(
            r#"
name: test
token: test
currency: GBP
line_items:
  - key: a
    type: product
    price: "1.00 GBP"
  - key: a
    type: product
    price: "2.00 GBP"
"#,
        );

        assert!(matches!(
            result,
            Err(FixtureError::Cart(CartError::DuplicateLineItem(_)))
        ));
    }

    #[test]
    fn load_cart_reads_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        write!(file, "{CART_YAML}")?;

        let cart = load_cart(file.path())?;

        assert_eq!(cart.len(), 3);

        Ok(())
    }
}
