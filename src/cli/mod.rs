//! Command line interface
//!
//! Evaluates a rule file against a cart fixture and prints the outcome.

use std::{io, path::PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::{
    context::{CheckoutContext, TaxState},
    fixtures::{FixtureError, carts::parse_currency, load_cart},
    report::{ReportError, write_report},
    rules::{Rule, RuleConfig, RuleConfigError, RuleError, RuleScope},
};

pub mod logging;

pub use logging::{LogFormat, LoggingError, init_subscriber};

/// Errors surfaced by the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Logging could not be initialised.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// The cart fixture could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The rule file could not be loaded.
    #[error(transparent)]
    RuleConfig(#[from] RuleConfigError),

    /// The rule could not be evaluated.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Evaluate a cart rule against a cart fixture.
#[derive(Debug, Parser)]
#[command(name = "cart-rules", about = "Cart rule evaluation", long_about = None)]
pub struct Cli {
    /// Cart fixture file (YAML)
    #[arg(short, long)]
    pub cart: PathBuf,

    /// Rule file (YAML)
    #[arg(short, long)]
    pub rule: PathBuf,

    /// Checkout currency; defaults to the cart currency
    #[arg(long)]
    pub currency: Option<String>,

    /// Checkout tax state
    #[arg(long, value_enum, default_value_t = TaxState::Gross)]
    pub tax_state: TaxState,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Install logging, evaluate the rule, and write the report to `out`.
    ///
    /// Returns whether the rule matched.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] if any step fails.
    pub fn run(&self, out: impl io::Write) -> Result<bool, CliError> {
        init_subscriber(&self.log_level, self.log_format)?;

        self.evaluate(out)
    }

    /// Evaluate the rule and write the report to `out`, without touching logging.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] if any step fails.
    pub fn evaluate(&self, out: impl io::Write) -> Result<bool, CliError> {
        let cart = load_cart(&self.cart)?;
        let rule = RuleConfig::load(&self.rule)?;

        let currency = match &self.currency {
            Some(code) => parse_currency(code)?,
            None => cart.currency(),
        };

        let context = CheckoutContext::new(currency).with_tax_state(self.tax_state);
        let result = rule.evaluate(&RuleScope::cart(&cart, &context))?;

        info!(
            cart = cart.name(),
            rule = rule.name(),
            matches = result.matches(),
            "evaluated cart"
        );

        write_report(out, &cart, &context, rule.name(), &result)?;

        Ok(result.matches())
    }
}
