use thiserror::Error;

/// Errors constructing a [`Rule`](crate::Rule) or [`Segment`](crate::Segment)
/// from a configuration definition.
///
/// These never escape a segment evaluation: a rule definition that fails to
/// convert is handled according to the segment's
/// [`RuleErrorPolicy`](crate::RuleErrorPolicy).
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("{kind} definition must be an object, got {found}")]
    NotAnObject {
        kind: &'static str,
        found: &'static str,
    },

    #[error("malformed {kind} definition: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Human-readable name for a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn not_an_object_message() {
        let err = DefinitionError::NotAnObject {
            kind: "rule",
            found: "an array",
        };
        assert_eq!(
            err.to_string(),
            "rule definition must be an object, got an array"
        );
    }

    #[test]
    fn json_kind_names() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "a boolean");
        assert_eq!(json_kind(&json!(1)), "a number");
        assert_eq!(json_kind(&json!("x")), "a string");
        assert_eq!(json_kind(&json!([])), "an array");
        assert_eq!(json_kind(&json!({})), "an object");
    }
}
