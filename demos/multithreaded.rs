use std::sync::Arc;
use std::thread;

use cohort::{Attributes, Segment};
use serde_json::json;

fn main() {
    let segment = Arc::new(
        Segment::from_definition(&json!({
            "name": "corporate beta testers",
            "segment_id": "q2nn80mx",
            "rules": [
                {"attribute_name": "email", "operator": "endsWith", "values": ["@ibm.com"]},
                {"attribute_name": "beta", "operator": "is", "values": [true]},
            ],
        }))
        .expect("failed to parse segment definition"),
    );

    let users = [
        ("dev@ibm.com", true),
        ("dev@ibm.com", false),
        ("someone@gmail.com", true),
    ];

    let handles: Vec<_> = users
        .into_iter()
        .map(|(email, beta)| {
            let seg = Arc::clone(&segment);
            thread::spawn(move || {
                let attrs = Attributes::new().set("email", email).set("beta", beta);
                (email, beta, seg.evaluate(&attrs))
            })
        })
        .collect();

    for handle in handles {
        let (email, beta, matched) = handle.join().unwrap();
        println!("{email} (beta={beta}) -> {matched}");
    }
}
