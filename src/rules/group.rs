//! Rule Groups
//!
//! Nested boolean composition of rules.

use serde::{Deserialize, Serialize};

use crate::rules::{MatchResult, Rule, RuleConfig, RuleError, RuleScope};

/// Boolean operation used to combine child rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolOp {
    /// All child rules must match.
    And,

    /// At least one child rule must match.
    Or,
}

/// A group of rules combined with a boolean operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleGroup {
    /// How `rules` are combined.
    pub op: BoolOp,

    /// Child rules. Empty means "always match".
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl RuleGroup {
    /// Create a group from operator and rules.
    pub fn new(op: BoolOp, rules: Vec<RuleConfig>) -> Self {
        Self { op, rules }
    }

    /// Group that requires every rule to match.
    pub fn all(rules: Vec<RuleConfig>) -> Self {
        Self::new(BoolOp::And, rules)
    }

    /// Group that requires any rule to match.
    pub fn any(rules: Vec<RuleConfig>) -> Self {
        Self::new(BoolOp::Or, rules)
    }
}

impl Rule for RuleGroup {
    fn name(&self) -> &'static str {
        match self.op {
            BoolOp::And => "and",
            BoolOp::Or => "or",
        }
    }

    fn evaluate(&self, scope: &RuleScope<'_, '_>) -> Result<MatchResult, RuleError> {
        if self.rules.is_empty() {
            return Ok(MatchResult::matched());
        }

        match self.op {
            BoolOp::And => {
                for rule in &self.rules {
                    let result = rule.evaluate(scope)?;

                    if !result.matches() {
                        return Ok(result);
                    }
                }

                Ok(MatchResult::matched())
            }
            BoolOp::Or => {
                let mut failures = Vec::with_capacity(self.rules.len());

                for rule in &self.rules {
                    let result = rule.evaluate(scope)?;

                    if result.matches() {
                        return Ok(result);
                    }

                    failures.extend(result.messages().iter().cloned());
                }

                Ok(MatchResult::not_matched(failures.join("; ")))
            }
        }
    }
}

/// Inverts the outcome of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotRule {
    /// Rule to invert
    pub rule: Box<RuleConfig>,
}

impl NotRule {
    /// Invert `rule`.
    pub fn new(rule: RuleConfig) -> Self {
        Self {
            rule: Box::new(rule),
        }
    }
}

impl Rule for NotRule {
    fn name(&self) -> &'static str {
        "not"
    }

    fn evaluate(&self, scope: &RuleScope<'_, '_>) -> Result<MatchResult, RuleError> {
        let inner = self.rule.evaluate(scope)?;

        Ok(MatchResult::from_bool(!inner.matches(), || {
            format!("{} matched", self.rule.name())
        }))
    }
}
