use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::error::json_kind;
use super::{Attributes, DefinitionError, Rule};

/// What a segment does with a rule definition that cannot be converted into
/// an evaluable [`Rule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleErrorPolicy {
    /// Skip the malformed rule; the remaining rules alone decide the match.
    /// Under this policy a segment can match even though one of its declared
    /// conditions was unevaluable.
    #[default]
    Skip,
    /// A malformed rule fails the whole conjunction.
    TreatAsFalse,
}

/// A named audience definition: a conjunction (AND) of rules.
///
/// The segment matches a set of identity attributes iff every rule in its
/// sequence matches, e.g. "country is India AND age greaterThan 18". Rules
/// are kept as raw definitions and converted on demand at evaluation time, so
/// one malformed entry never poisons the segment as a whole; see
/// [`RuleErrorPolicy`] for how such entries are treated.
///
/// `name` and `segment_id` are labels only and play no part in evaluation.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    name: String,
    segment_id: String,
    rules: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SegmentDef {
    name: String,
    segment_id: String,
    rules: Vec<serde_json::Value>,
}

impl From<SegmentDef> for Segment {
    fn from(def: SegmentDef) -> Self {
        Segment {
            name: def.name,
            segment_id: def.segment_id,
            rules: def.rules,
        }
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        SegmentDef::deserialize(deserializer).map(Segment::from)
    }
}

impl Segment {
    /// Construct a segment from raw rule definitions.
    pub fn new(
        name: impl Into<String>,
        segment_id: impl Into<String>,
        rules: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            segment_id: segment_id.into(),
            rules,
        }
    }

    /// Convert a parsed definition into a segment.
    ///
    /// All keys (`name`, `segment_id`, `rules`) are optional and default to
    /// empty. Entries of `rules` are not validated here; each is converted to
    /// a [`Rule`] when the segment is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] if the definition is not a JSON object or
    /// a present key has the wrong shape.
    pub fn from_definition(definition: &serde_json::Value) -> Result<Segment, DefinitionError> {
        if !definition.is_object() {
            return Err(DefinitionError::NotAnObject {
                kind: "segment",
                found: json_kind(definition),
            });
        }
        serde_json::from_value(definition.clone()).map_err(|source| DefinitionError::Malformed {
            kind: "segment",
            source,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn segment_id(&self) -> &str {
        &self.segment_id
    }

    /// The raw rule definitions, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[serde_json::Value] {
        &self.rules
    }

    /// Evaluate this segment against the supplied identity attributes using
    /// the default rule-error policy ([`RuleErrorPolicy::Skip`]).
    #[must_use]
    pub fn evaluate(&self, attributes: &Attributes) -> bool {
        self.evaluate_with_policy(attributes, RuleErrorPolicy::default())
    }

    /// Evaluate this segment against the supplied identity attributes.
    ///
    /// Rules are converted and evaluated in declaration order; the first rule
    /// that evaluates to `false` short-circuits the conjunction. A rule
    /// definition that fails to convert is logged and handled per `policy`.
    /// An empty rule sequence matches everything (vacuous AND).
    #[must_use]
    pub fn evaluate_with_policy(&self, attributes: &Attributes, policy: RuleErrorPolicy) -> bool {
        for definition in &self.rules {
            match Rule::from_definition(definition) {
                Ok(rule) => {
                    if !rule.evaluate(attributes) {
                        return false;
                    }
                }
                Err(err) => {
                    debug!(
                        segment_id = %self.segment_id,
                        error = %err,
                        "rule definition could not be evaluated"
                    );
                    if policy == RuleErrorPolicy::TreatAsFalse {
                        return false;
                    }
                }
            }
        }
        true
    }
}
