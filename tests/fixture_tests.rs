//! Whole-document fixtures.
//!
//! Runs the cases in tests/fixtures.json through `to_html`.

use linemark::to_html;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    markdown: String,
    html: String,
}

fn load_fixtures() -> Vec<Fixture> {
    let json = fs::read_to_string("tests/fixtures.json")
        .expect("Failed to read tests/fixtures.json");
    serde_json::from_str(&json).expect("Failed to parse fixtures.json")
}

#[test]
fn fixtures() {
    let fixtures = load_fixtures();
    assert!(!fixtures.is_empty());

    let failures: Vec<_> = fixtures
        .iter()
        .filter_map(|fixture| {
            let output = to_html(&fixture.markdown);
            (output != fixture.html).then(|| (fixture, output))
        })
        .collect();

    for (fixture, got) in &failures {
        eprintln!("\nFixture {:?}: {:?}", fixture.name, fixture.markdown);
        eprintln!("  Expected: {:?}", fixture.html);
        eprintln!("  Got:      {:?}", got);
    }
    assert!(
        failures.is_empty(),
        "{}/{} fixtures failed",
        failures.len(),
        fixtures.len()
    );
}

#[test]
fn fixtures_are_stable_across_runs() {
    for fixture in load_fixtures() {
        assert_eq!(
            to_html(&fixture.markdown),
            to_html(&fixture.markdown),
            "{}",
            fixture.name
        );
    }
}
