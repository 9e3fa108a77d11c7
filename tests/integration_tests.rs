//! Integration tests for langtour
//!
//! These tests verify the end-to-end transcript guarantees through the
//! public library surface: the exact canonical text, JSON parity with the
//! text rendering, and behavior against real file sinks.

use langtour::tour::{Section, Tour};
use pretty_assertions::assert_eq;
use std::fs;

/// The transcript the default lesson must reproduce byte for byte.
const CANONICAL_TRANSCRIPT: &str = "\
Hello, Mike! Welcome to Java.
Your age is: 25
The value of Pi is approximately: 3.14159
Is Java fun? true

--- 2. CONTROL FLOW: IF-ELSE STATEMENT ---

You are old enough to enjoy the Las Vegas nightlife!

--- 3. CONTROL FLOW: FOR LOOP ---

Let's count to 5:
Count: 1
Count: 2
Count: 3
Count: 4
Count: 5

--- 4. METHODS ---

The sum of 10 and 20 is: 30
";

#[test]
fn canonical_transcript_is_exact() {
    let transcript = Tour::default().transcript();
    assert_eq!(transcript.to_text(), CANONICAL_TRANSCRIPT);
}

#[test]
fn transcript_written_to_a_file_round_trips() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let transcript = Tour::default().transcript();
    transcript
        .write_text(file.as_file_mut())
        .expect("Failed to write transcript");

    let text = fs::read_to_string(file.path()).expect("Failed to read transcript back");
    assert_eq!(text, CANONICAL_TRANSCRIPT);
}

#[test]
fn json_rendering_carries_the_same_lines_as_text() {
    let transcript = Tour::default().transcript();
    let json = serde_json::to_value(&transcript).expect("Failed to serialize transcript");

    let sections = json["sections"]
        .as_array()
        .expect("sections must be an array");
    assert_eq!(sections.len(), 4);

    // The opening section prints no header and serializes none.
    assert!(sections[0].get("header").is_none());
    assert_eq!(sections[0]["section"], "variables");
    assert_eq!(
        sections[1]["header"],
        "--- 2. CONTROL FLOW: IF-ELSE STATEMENT ---"
    );
    assert_eq!(sections[3]["section"], "methods");

    // Flattened JSON lines match the library's own line iterator.
    let json_lines: Vec<String> = sections
        .iter()
        .flat_map(|section| {
            section["lines"]
                .as_array()
                .expect("lines must be an array")
                .iter()
                .map(|line| line.as_str().expect("line must be a string").to_string())
        })
        .collect();
    let text_lines: Vec<String> = transcript.lines().map(str::to_string).collect();
    assert_eq!(json_lines, text_lines);
}

#[test]
fn age_override_swaps_exactly_one_line() {
    let adult = Tour::default().transcript();
    let minor = Tour {
        age: 18,
        ..Tour::default()
    }
    .transcript();

    let adult_lines: Vec<&str> = adult.lines().collect();
    let minor_lines: Vec<&str> = minor.lines().collect();
    assert_eq!(adult_lines.len(), minor_lines.len());

    let differing: Vec<(usize, (&&str, &&str))> = adult_lines
        .iter()
        .zip(minor_lines.iter())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .collect();

    // The age line and the branch line change; nothing else may.
    assert_eq!(differing.len(), 2);
    assert_eq!(*differing[0].1 .1, "Your age is: 18");
    assert_eq!(
        *differing[1].1 .1,
        "Not quite old enough for the casinos yet."
    );
}

#[test]
fn single_section_runs_stay_consistent_with_the_full_lesson() {
    let tour = Tour::default();
    let full = tour.transcript();

    for section in Section::ALL {
        let solo = tour.section_transcript(section);
        assert_eq!(solo.sections.len(), 1);

        let from_full = &full
            .sections
            .iter()
            .find(|report| report.section == section)
            .expect("full transcript covers every section")
            .lines;
        assert_eq!(&solo.sections[0].lines, from_full);
    }
}

#[test]
fn repeated_runs_are_identical() {
    let tour = Tour::default();
    let first = tour.transcript().to_text();
    for _ in 0..3 {
        assert_eq!(tour.transcript().to_text(), first);
    }
}
