//! Report
//!
//! Console rendering of a cart and the outcome of evaluating a rule against it.

use std::io;

use rusty_money::MoneyError;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    context::CheckoutContext,
    items::LineItem,
    rules::MatchResult,
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error calculating cart totals.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Writes the cart's line items followed by the checkout context and rule outcome.
///
/// A cart holding unpriced goods reports its goods price as `unpriced`.
///
/// # Errors
///
/// Returns a [`ReportError`] if line item taxes cannot be summed or writing fails.
pub fn write_report(
    mut out: impl io::Write,
    cart: &Cart<'_>,
    context: &CheckoutContext,
    rule_name: &str,
    result: &MatchResult,
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record(["Key", "Type", "Qty", "Good", "Unit", "Total", "Tax"]);

    for item in cart.line_items() {
        builder.push_record(line_item_cells(item, cart)?);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..3), Alignment::right());
    table.modify(Columns::new(4..7), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReportError::IO)?;

    let outcome = if result.matches() {
        "matched"
    } else {
        "not matched"
    };

    let goods_price = match cart.goods_price() {
        Ok(price) => price.to_string(),
        Err(CartError::UnpricedLineItem(_)) => "unpriced".to_string(),
        Err(err) => return Err(err.into()),
    };

    writeln!(
        out,
        " Checkout: {}, {}",
        context.currency().iso_alpha_code,
        context.tax_state()
    )
    .map_err(|_err| ReportError::IO)?;
    writeln!(out, " Goods price: {goods_price}").map_err(|_err| ReportError::IO)?;
    writeln!(out, " Goods count: {}", cart.goods_count()).map_err(|_err| ReportError::IO)?;
    writeln!(out, " Rule {rule_name}: {outcome}").map_err(|_err| ReportError::IO)?;

    for message in result.messages() {
        writeln!(out, "   - {message}").map_err(|_err| ReportError::IO)?;
    }

    Ok(())
}

fn line_item_cells(item: &LineItem<'_>, cart: &Cart<'_>) -> Result<[String; 7], ReportError> {
    let (unit, total, tax) = match item.price() {
        Some(price) => (
            price.unit_price().to_string(),
            price.total_price().to_string(),
            price.calculated_taxes().amount(cart.currency())?.to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    Ok([
        item.key().to_string(),
        item.kind().to_string(),
        item.quantity().to_string(),
        if item.is_good() { "yes" } else { "no" }.to_string(),
        unit,
        total,
        tax,
    ])
}
