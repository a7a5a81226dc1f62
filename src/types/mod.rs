mod attributes;
mod error;
mod operator;
mod rule;
mod segment;
mod value;

pub use attributes::Attributes;
pub use error::DefinitionError;
pub use operator::Operator;
pub use rule::Rule;
pub use segment::{RuleErrorPolicy, Segment};
pub use value::AttrValue;
