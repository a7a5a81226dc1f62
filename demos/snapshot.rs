use cohort::{Attributes, RuleErrorPolicy, Segment};
use serde_json::json;

// Demonstrates evaluating a whole snapshot of segment definitions, including
// one carrying a malformed rule, under both rule-error policies.
fn main() {
    let snapshot = json!({
        "segments": [
            {
                "name": "bangalore users",
                "segment_id": "seg-blr",
                "rules": [
                    {"attribute_name": "country", "operator": "is", "values": ["India"]},
                    {"attribute_name": "city", "operator": "is", "values": ["Bangalore"]},
                ],
            },
            {
                "name": "partially broken",
                "segment_id": "seg-broken",
                "rules": [
                    {"attribute_name": "country", "operator": "is", "values": ["India"]},
                    {"values": {"unexpected": "shape"}},
                ],
            },
        ],
    });

    let segments: Vec<Segment> = snapshot["segments"]
        .as_array()
        .expect("snapshot has a segments array")
        .iter()
        .map(|def| Segment::from_definition(def).expect("segment definition parses"))
        .collect();

    let attrs = Attributes::from_json(&json!({
        "country": "India",
        "city": "Bangalore",
    }));

    for segment in &segments {
        let skip = segment.evaluate(&attrs);
        let strict = segment.evaluate_with_policy(&attrs, RuleErrorPolicy::TreatAsFalse);
        println!(
            "{:<20} skip={skip:<5} treat-as-false={strict}",
            segment.name()
        );
    }
}
