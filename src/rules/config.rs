//! Rule Configuration
//!
//! Rules are configured as a tagged YAML tree:
//!
//! ```yaml
//! type: group
//! op: and
//! rules:
//!   - type: goods_price
//!     amount: 270.0
//!     operator: ">="
//!   - type: not
//!     rule:
//!       type: goods_count
//!       count: 10
//!       operator: ">"
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::rules::{
    GoodsCountRule, GoodsPriceRule, MatchResult, NotRule, Rule, RuleError, RuleGroup, RuleScope,
};

/// Errors loading a rule configuration.
#[derive(Debug, Error)]
pub enum RuleConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read rule file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error, including missing fields and unknown operators
    #[error("Failed to parse rule: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Any configured rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Compare the goods price of the cart.
    GoodsPrice(GoodsPriceRule),

    /// Compare the number of goods in the cart.
    GoodsCount(GoodsCountRule),

    /// Combine rules with a boolean operation.
    Group(RuleGroup),

    /// Invert a rule.
    Not(NotRule),
}

impl RuleConfig {
    /// Parse a rule from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigError::Yaml`] if the YAML is invalid or does not describe a rule.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RuleConfigError> {
        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load a rule from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let rule = Self::from_yaml_str(&contents)?;

        debug!(path = %path.display(), rule = rule.name(), "loaded rule");

        Ok(rule)
    }

    fn as_rule(&self) -> &dyn Rule {
        match self {
            Self::GoodsPrice(rule) => rule,
            Self::GoodsCount(rule) => rule,
            Self::Group(rule) => rule,
            Self::Not(rule) => rule,
        }
    }
}

impl Rule for RuleConfig {
    fn name(&self) -> &'static str {
        self.as_rule().name()
    }

    fn evaluate(&self, scope: &RuleScope<'_, '_>) -> Result<MatchResult, RuleError> {
        self.as_rule().evaluate(scope)
    }
}

impl From<GoodsPriceRule> for RuleConfig {
    fn from(rule: GoodsPriceRule) -> Self {
        Self::GoodsPrice(rule)
    }
}

impl From<GoodsCountRule> for RuleConfig {
    fn from(rule: GoodsCountRule) -> Self {
        Self::GoodsCount(rule)
    }
}

impl From<RuleGroup> for RuleConfig {
    fn from(rule: RuleGroup) -> Self {
        Self::Group(rule)
    }
}

impl From<NotRule> for RuleConfig {
    fn from(rule: NotRule) -> Self {
        Self::Not(rule)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal::Decimal;
    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use crate::rules::{BoolOp, Operator};

    use super::*;

    #[test]
    fn parses_goods_price_rule() -> TestResult {
        let rule = RuleConfig::from_yaml_str(
            r#"
type: goods_price
amount: 270.0
operator: "="
"#,
        )?;

        assert_eq!(
            rule,
            RuleConfig::GoodsPrice(GoodsPriceRule::new(270, Operator::Eq))
        );

        Ok(())
    }

    #[test]
    fn parses_string_and_negative_amounts() -> TestResult {
        let quoted =
            RuleConfig::from_yaml_str("type: goods_price\namount: \"19.99\"\noperator: \"<\"")?;
        let negative =
            RuleConfig::from_yaml_str("type: goods_price\namount: -1\noperator: \"<=\"")?;

        assert_eq!(
            quoted,
            RuleConfig::GoodsPrice(GoodsPriceRule::new(Decimal::new(1_999, 2), Operator::Lt))
        );
        assert_eq!(
            negative,
            RuleConfig::GoodsPrice(GoodsPriceRule::new(Decimal::NEGATIVE_ONE, Operator::Lte))
        );

        Ok(())
    }

    #[test]
    fn parses_nested_groups() -> TestResult {
        let rule = RuleConfig::from_yaml_str(
            r#"
type: group
op: or
rules:
  - type: goods_count
    count: 2
    operator: ">="
  - type: not
    rule:
      type: goods_price
      amount: 50
      operator: "<"
"#,
        )?;

        assert!(matches!(
            &rule,
            RuleConfig::Group(group)
                if group.op == BoolOp::Or
                    && group.rules.len() == 2
                    && matches!(group.rules.get(1), Some(RuleConfig::Not(_)))
        ));
        assert_eq!(rule.name(), "or");

        Ok(())
    }

    #[test]
    fn missing_amount_is_a_configuration_error() {
        let result = RuleConfig::from_yaml_str("type: goods_price\noperator: \"=\"");

        assert!(matches!(result, Err(RuleConfigError::Yaml(_))));
    }

    #[test]
    fn unknown_operator_is_a_configuration_error() {
        let result = RuleConfig::from_yaml_str("type: goods_price\namount: 1\noperator: \"=>\"");

        assert!(matches!(result, Err(RuleConfigError::Yaml(_))));
    }

    #[test]
    fn unknown_rule_type_is_a_configuration_error() {
        let result = RuleConfig::from_yaml_str("type: customer_group\nids: [1]");

        assert!(matches!(result, Err(RuleConfigError::Yaml(_))));
    }

    #[test]
    fn load_reads_yaml_file() -> TestResult {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "type: goods_count\ncount: 3\noperator: \"!=\"")?;

        let rule = RuleConfig::load(file.path())?;

        assert_eq!(rule, RuleConfig::from(GoodsCountRule::new(3, Operator::Neq)));
        assert_eq!(rule.name(), "goods_count");

        Ok(())
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = RuleConfig::load("/nonexistent/rule.yml");

        assert!(matches!(result, Err(RuleConfigError::Io(_))));
    }
}
