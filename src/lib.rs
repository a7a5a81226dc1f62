mod predicate;
mod types;

pub use types::{AttrValue, Attributes, DefinitionError, Operator, Rule, RuleErrorPolicy, Segment};
