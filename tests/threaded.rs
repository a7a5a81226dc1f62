use std::sync::Arc;
use std::thread;

use cohort::{Attributes, Segment};
use serde_json::json;

#[test]
fn evaluate_across_threads() {
    let segment = Arc::new(
        Segment::from_definition(&json!({
            "name": "adult indian users",
            "segment_id": "seg-in-18",
            "rules": [
                {"attribute_name": "country", "operator": "is", "values": ["India"]},
                {"attribute_name": "age", "operator": "greaterThan", "values": ["18"]},
            ],
        }))
        .unwrap(),
    );

    let mut handles = vec![];

    // Thread 1: both rules match.
    let seg = Arc::clone(&segment);
    handles.push(thread::spawn(move || {
        let attrs = Attributes::new().set("country", "India").set("age", "21");
        seg.evaluate(&attrs)
    }));

    // Thread 2: wrong country.
    let seg = Arc::clone(&segment);
    handles.push(thread::spawn(move || {
        let attrs = Attributes::new().set("country", "France").set("age", "21");
        seg.evaluate(&attrs)
    }));

    // Thread 3: negative age fails the digits-only ordering check.
    let seg = Arc::clone(&segment);
    handles.push(thread::spawn(move || {
        let attrs = Attributes::new().set("country", "India").set("age", "-5");
        seg.evaluate(&attrs)
    }));

    // Thread 4: age attribute missing entirely.
    let seg = Arc::clone(&segment);
    handles.push(thread::spawn(move || {
        let attrs = Attributes::new().set("country", "India");
        seg.evaluate(&attrs)
    }));

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results, vec![true, false, false, false]);
}

#[test]
fn shared_segment_agrees_with_single_threaded_result() {
    let segment = Arc::new(Segment::new(
        "beta",
        "seg-beta",
        vec![json!({"attribute_name": "beta", "operator": "is", "values": [true]})],
    ));
    let attrs = Attributes::new().set("beta", true);
    let expected = segment.evaluate(&attrs);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let seg = Arc::clone(&segment);
            let attrs = attrs.clone();
            thread::spawn(move || (0..1000).all(|_| seg.evaluate(&attrs) == expected))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
