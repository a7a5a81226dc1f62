use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::error::json_kind;
use super::{AttrValue, Attributes, DefinitionError, Operator};
use crate::predicate;

/// A single attribute-vs-value predicate.
///
/// A rule matches when its named identity attribute satisfies the operator
/// against *any* of the declared candidate values (supporting rules like
/// "role is \[admin, superuser\]"). Every definition key is optional; a rule
/// built from an empty definition is valid and never matches.
///
/// Evaluation is a pure function of the rule and the attribute map: no side
/// effects beyond diagnostic logging, no errors, no panics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    attribute_name: String,
    operator: String,
    values: Vec<AttrValue>,
}

/// Wire shape of a rule definition. `values` admits `null` entries, which are
/// dropped on conversion: a null candidate cannot satisfy any operator, so
/// the any-of result is unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RuleDef {
    attribute_name: String,
    operator: String,
    values: Vec<Option<AttrValue>>,
}

impl From<RuleDef> for Rule {
    fn from(def: RuleDef) -> Self {
        Rule {
            attribute_name: def.attribute_name,
            operator: def.operator,
            values: def.values.into_iter().flatten().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RuleDef::deserialize(deserializer).map(Rule::from)
    }
}

impl Rule {
    /// Construct a rule directly. The operator is kept as its raw tag;
    /// unrecognized tags are allowed and evaluate to "no match".
    pub fn new(
        attribute_name: impl Into<String>,
        operator: impl Into<String>,
        values: Vec<AttrValue>,
    ) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            operator: operator.into(),
            values,
        }
    }

    /// Convert a parsed definition into a rule.
    ///
    /// All keys (`attribute_name`, `operator`, `values`) are optional and
    /// default to empty.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] if the definition is not a JSON object or
    /// a present key has the wrong shape (e.g. an array or object inside
    /// `values`).
    pub fn from_definition(definition: &serde_json::Value) -> Result<Rule, DefinitionError> {
        if !definition.is_object() {
            return Err(DefinitionError::NotAnObject {
                kind: "rule",
                found: json_kind(definition),
            });
        }
        serde_json::from_value(definition.clone()).map_err(|source| DefinitionError::Malformed {
            kind: "rule",
            source,
        })
    }

    #[must_use]
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    #[must_use]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    #[must_use]
    pub fn values(&self) -> &[AttrValue] {
        &self.values
    }

    /// Evaluate this rule against the supplied identity attributes.
    ///
    /// Returns `false` when the attribute is absent, the operator tag is
    /// unrecognized, or no candidate value satisfies the operator. Never
    /// errors for any input.
    #[must_use]
    pub fn evaluate(&self, attributes: &Attributes) -> bool {
        let Some(key) = attributes.get(&self.attribute_name) else {
            return false;
        };
        let Some(op) = Operator::from_tag(&self.operator) else {
            debug!(
                operator = %self.operator,
                attribute = %self.attribute_name,
                "unrecognized operator in rule definition"
            );
            return false;
        };
        self.values
            .iter()
            .any(|value| predicate::operator_check(op, key, value))
    }
}
