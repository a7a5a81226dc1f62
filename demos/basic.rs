use cohort::{Attributes, Segment};
use serde_json::json;

fn main() {
    // A segment definition as it would arrive in a configuration snapshot.
    let segment = Segment::from_definition(&json!({
        "name": "adult indian users",
        "segment_id": "kdu77n4s",
        "rules": [
            {"attribute_name": "country", "operator": "is", "values": ["India"]},
            {"attribute_name": "age", "operator": "greaterThan", "values": ["18"]},
        ],
    }))
    .expect("failed to parse segment definition");

    println!("segment: {} ({})", segment.name(), segment.segment_id());

    // Evaluate against identity attributes.
    let adult = Attributes::new().set("country", "India").set("age", "21");
    let minor = Attributes::new().set("country", "India").set("age", "12");

    println!("age 21 -> {}", segment.evaluate(&adult));
    println!("age 12 -> {}", segment.evaluate(&minor));
}
