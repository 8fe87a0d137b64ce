use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicate conditions the surrounding engine can express.
///
/// The scan core evaluates the six comparison operators. The remaining
/// variants exist so that a mis-routed predicate is rejected with a proper
/// error instead of being silently dropped; `IS NULL`, `IS NOT NULL` and
/// `BETWEEN` are decomposed by the caller before reaching this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredicateCondition {
    Equals,
    NotEquals,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
    Like,
    IsNull,
    IsNotNull,
    BetweenInclusive,
}

impl PredicateCondition {
    /// Whether the scan core can evaluate this predicate directly.
    pub fn is_scannable(&self) -> bool {
        matches!(
            self,
            PredicateCondition::Equals
                | PredicateCondition::NotEquals
                | PredicateCondition::LessThan
                | PredicateCondition::LessThanEquals
                | PredicateCondition::GreaterThan
                | PredicateCondition::GreaterThanEquals
        )
    }
}

impl fmt::Display for PredicateCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            PredicateCondition::Equals => "=",
            PredicateCondition::NotEquals => "!=",
            PredicateCondition::LessThan => "<",
            PredicateCondition::LessThanEquals => "<=",
            PredicateCondition::GreaterThan => ">",
            PredicateCondition::GreaterThanEquals => ">=",
            PredicateCondition::Like => "LIKE",
            PredicateCondition::IsNull => "IS NULL",
            PredicateCondition::IsNotNull => "IS NOT NULL",
            PredicateCondition::BetweenInclusive => "BETWEEN",
        };
        write!(f, "{symbol}")
    }
}
