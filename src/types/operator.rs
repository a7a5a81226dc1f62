use std::fmt;

/// Predicate operators recognized in rule definitions.
///
/// Tags are the camelCase strings carried by configuration snapshots.
/// [`from_tag`](Operator::from_tag) returns `None` for anything else; a rule
/// carrying an unrecognized tag is legal data that never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    EndsWith,
    StartsWith,
    Contains,
    Is,
    GreaterThan,
    LesserThan,
    GreaterThanEquals,
    LesserThanEquals,
}

impl Operator {
    /// Parse a wire tag. Case-sensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Operator> {
        match tag {
            "endsWith" => Some(Operator::EndsWith),
            "startsWith" => Some(Operator::StartsWith),
            "contains" => Some(Operator::Contains),
            "is" => Some(Operator::Is),
            "greaterThan" => Some(Operator::GreaterThan),
            "lesserThan" => Some(Operator::LesserThan),
            "greaterThanEquals" => Some(Operator::GreaterThanEquals),
            "lesserThanEquals" => Some(Operator::LesserThanEquals),
            _ => None,
        }
    }

    /// The wire tag for this operator.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Operator::EndsWith => "endsWith",
            Operator::StartsWith => "startsWith",
            Operator::Contains => "contains",
            Operator::Is => "is",
            Operator::GreaterThan => "greaterThan",
            Operator::LesserThan => "lesserThan",
            Operator::GreaterThanEquals => "greaterThanEquals",
            Operator::LesserThanEquals => "lesserThanEquals",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Operator] = &[
        Operator::EndsWith,
        Operator::StartsWith,
        Operator::Contains,
        Operator::Is,
        Operator::GreaterThan,
        Operator::LesserThan,
        Operator::GreaterThanEquals,
        Operator::LesserThanEquals,
    ];

    #[test]
    fn tag_round_trips() {
        for &op in ALL {
            assert_eq!(Operator::from_tag(op.tag()), Some(op));
            assert_eq!(op.to_string(), op.tag());
        }
    }

    #[test]
    fn unrecognized_tags_are_none() {
        assert_eq!(Operator::from_tag("equals"), None);
        assert_eq!(Operator::from_tag("IS"), None);
        assert_eq!(Operator::from_tag("greaterthan"), None);
        assert_eq!(Operator::from_tag(""), None);
    }
}
