use std::cmp::Ordering;

use crate::{AttrValue, Operator};

/// Test one candidate value against an identity attribute's value.
///
/// `key` is the attribute's value, `value` the rule's candidate. Operand type
/// mismatches degrade to `false`; nothing here can fail or panic.
pub(crate) fn operator_check(op: Operator, key: &AttrValue, value: &AttrValue) -> bool {
    match op {
        Operator::EndsWith => with_strs(key, value, |k, v| k.ends_with(v)),
        Operator::StartsWith => with_strs(key, value, |k, v| k.starts_with(v)),
        // Asymmetric: tests containment of the key inside the candidate.
        Operator::Contains => with_strs(key, value, |k, v| v.contains(k)),
        Operator::Is => is_equal(key, value),
        Operator::GreaterThan => ordered(key, value, |o| o == Ordering::Greater),
        Operator::GreaterThanEquals => ordered(key, value, |o| o != Ordering::Less),
        Operator::LesserThan => ordered(key, value, |o| o == Ordering::Less),
        Operator::LesserThanEquals => ordered(key, value, |o| o != Ordering::Greater),
    }
}

fn with_strs(key: &AttrValue, value: &AttrValue, f: impl Fn(&str, &str) -> bool) -> bool {
    match (key, value) {
        (AttrValue::Str(k), AttrValue::Str(v)) => f(k, v),
        _ => false,
    }
}

/// Strict equality: operands must share a variant. `Int(5)` never equals
/// `Float(5.0)` or `Str("5")`.
fn is_equal(key: &AttrValue, value: &AttrValue) -> bool {
    match (key, value) {
        (AttrValue::Str(k), AttrValue::Str(v)) => k == v,
        (AttrValue::Int(k), AttrValue::Int(v)) => k == v,
        (AttrValue::Float(k), AttrValue::Float(v)) => k == v,
        (AttrValue::Bool(k), AttrValue::Bool(v)) => k == v,
        _ => false,
    }
}

/// Ordering comparisons apply only when both operands share a variant and the
/// key's string form is digits-only. String keys compare lexicographically;
/// stored configurations depend on that, so it must not be "fixed" to a
/// numeric parse. Float and bool keys never pass the digits-only test.
fn ordered(key: &AttrValue, value: &AttrValue, f: impl Fn(Ordering) -> bool) -> bool {
    match (key, value) {
        (AttrValue::Str(k), AttrValue::Str(v)) if is_digits(k) => f(k.as_str().cmp(v.as_str())),
        (AttrValue::Int(k), AttrValue::Int(v)) if *k >= 0 => f(k.cmp(v)),
        _ => false,
    }
}

/// Non-empty and ASCII digits only. Rejects `-`, `.`, and exponents, so
/// negative and decimal keys never reach an ordering comparison.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
