/// Integration tests for the belltime-engine binary.
///
/// These tests spawn the compiled binary via assert_cmd and verify
/// the JSON stdin/stdout protocol for all key scenarios.
///
/// Run with: cargo test --manifest-path crates/engine/Cargo.toml
use assert_cmd::Command;
use predicates::str::contains;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn cmd() -> Command {
    Command::cargo_bin("belltime-engine").unwrap()
}

/// 08:00-14:00, 40-minute periods, 5-minute gaps, recess after period 3,
/// six working days. Yields 8 periods per day.
const STANDARD_SETTINGS: &str = r#"{
    "dayStart": "08:00",
    "dayEnd": "14:00",
    "periodDurationMins": 40,
    "gapBetweenPeriodsMins": 5,
    "breaks": [
        { "name": "Recess", "afterPeriod": 3, "durationMins": 15, "appliesTo": "All" }
    ],
    "workingDays": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
}"#;

/// Minutes since midnight for an "HH:MM" JSON string value.
fn mins(t: &serde_json::Value) -> u32 {
    let s = t.as_str().unwrap();
    let (h, m) = s.split_once(':').unwrap();
    h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
}

fn allocations(lecture_counts: &[u32]) -> String {
    let entries: Vec<String> = lecture_counts
        .iter()
        .enumerate()
        .map(|(i, count)| {
            format!(
                r#"{{"subjectId":{},"lecturesPerWeek":{},"maxConsecutivePeriods":2,"minGapBetweenPeriods":0,"requiresLab":false,"labDurationPeriods":2}}"#,
                i + 1,
                count
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

// ---------------------------------------------------------------------------
// Test 1: schedule_standard_day
// Full day generation: gap-spaced slots, recess after period 3, last period
// ends within the 15-minute slack past the nominal day end.
// ---------------------------------------------------------------------------

#[test]
fn schedule_standard_day() {
    let input = format!(r#"{{"command":"schedule","settings":{}}}"#, STANDARD_SETTINGS);

    let output = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(r#""ok":true"#))
        .stdout(contains(r#""slots""#))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let slots = parsed["data"]["slots"].as_array().unwrap();

    // Spacing: the slot after a period starts one 5-minute gap later; the
    // slot after a break starts exactly where the break ended.
    for pair in slots.windows(2) {
        let gap = if pair[0]["kind"] == "period" { 5 } else { 0 };
        assert_eq!(
            mins(&pair[1]["start"]),
            mins(&pair[0]["end"]) + gap,
            "unexpected slot spacing: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }

    // Eight periods, numbered 1..=8 in order.
    let periods: Vec<&serde_json::Value> =
        slots.iter().filter(|s| s["kind"] == "period").collect();
    assert_eq!(periods.len(), 8);
    for (i, p) in periods.iter().enumerate() {
        assert_eq!(p["number"], (i + 1) as u64);
    }

    // Recess sits immediately after period 3.
    assert_eq!(slots[2]["kind"], "period");
    assert_eq!(slots[2]["number"], 3);
    assert_eq!(slots[3]["kind"], "break");
    assert_eq!(slots[3]["name"], "Recess");
    assert_eq!(slots[3]["start"], "10:15");
    assert_eq!(slots[3]["end"], "10:30");

    // Last period ends at 14:10, inside the 15-minute slack past 14:00.
    assert_eq!(periods.last().unwrap()["end"], "14:10");
}

// ---------------------------------------------------------------------------
// Test 2: schedule_ignores_unreachable_break
// A break rule anchored to a period the day never reaches must not appear.
// ---------------------------------------------------------------------------

#[test]
fn schedule_ignores_unreachable_break() {
    let input = r#"{
        "command": "schedule",
        "settings": {
            "dayStart": "08:00",
            "dayEnd": "14:00",
            "periodDurationMins": 40,
            "gapBetweenPeriodsMins": 5,
            "breaks": [
                { "name": "Ghost", "afterPeriod": 99, "durationMins": 15, "appliesTo": "All" }
            ],
            "workingDays": ["Monday"]
        }
    }"#;

    let output = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(r#""ok":true"#))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let slots = parsed["data"]["slots"].as_array().unwrap();

    assert!(slots.iter().all(|s| s["kind"] == "period"));
}

// ---------------------------------------------------------------------------
// Test 3: schedule_zero_period_duration_fails
// Zero period duration must be a typed configuration error, not a hang.
// ---------------------------------------------------------------------------

#[test]
fn schedule_zero_period_duration_fails() {
    let input = r#"{
        "command": "schedule",
        "settings": {
            "dayStart": "08:00",
            "dayEnd": "14:00",
            "periodDurationMins": 0,
            "gapBetweenPeriodsMins": 5,
            "breaks": [],
            "workingDays": ["Monday"]
        }
    }"#;

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(contains(r#""ok":false"#))
        .stdout(contains("period duration"));
}

// ---------------------------------------------------------------------------
// Test 4: schedule_bad_time_string_fails
// An unparseable day start must surface as an error response.
// ---------------------------------------------------------------------------

#[test]
fn schedule_bad_time_string_fails() {
    let input = r#"{
        "command": "schedule",
        "settings": {
            "dayStart": "8am",
            "dayEnd": "14:00",
            "periodDurationMins": 40,
            "gapBetweenPeriodsMins": 5,
            "breaks": [],
            "workingDays": ["Monday"]
        }
    }"#;

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(contains(r#""ok":false"#))
        .stdout(contains("invalid time"));
}

// ---------------------------------------------------------------------------
// Test 5: summarize_with_free_capacity
// 42 lectures against 8 periods x 6 days = 48 -> 6 free periods (delta -6).
// ---------------------------------------------------------------------------

#[test]
fn summarize_with_free_capacity() {
    let input = format!(
        r#"{{"command":"summarize","settings":{},"allocations":{}}}"#,
        STANDARD_SETTINGS,
        allocations(&[8, 8, 8, 6, 6, 6])
    );

    let output = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(r#""ok":true"#))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed["data"]["totalLecturesPerWeek"], 42);
    assert_eq!(parsed["data"]["capacityPerWeek"], 48);
    assert_eq!(parsed["data"]["delta"], -6);
}

// ---------------------------------------------------------------------------
// Test 6: summarize_over_allocated
// 50 lectures against the same 48-period capacity -> delta +2.
// ---------------------------------------------------------------------------

#[test]
fn summarize_over_allocated() {
    let input = format!(
        r#"{{"command":"summarize","settings":{},"allocations":{}}}"#,
        STANDARD_SETTINGS,
        allocations(&[30, 20])
    );

    let output = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(r#""ok":true"#))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed["data"]["totalLecturesPerWeek"], 50);
    assert_eq!(parsed["data"]["capacityPerWeek"], 48);
    assert_eq!(parsed["data"]["delta"], 2);
}

// ---------------------------------------------------------------------------
// Test 7: validate_valid_settings
// A valid configuration must return ok:true and an empty errors array.
// ---------------------------------------------------------------------------

#[test]
fn validate_valid_settings() {
    let input = format!(r#"{{"command":"validate","settings":{}}}"#, STANDARD_SETTINGS);

    let output = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(r#""ok":true"#))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    let errors = parsed["data"]["errors"].as_array().unwrap();
    assert!(errors.is_empty(), "Valid settings should have no errors, got: {:?}", errors);
}

// ---------------------------------------------------------------------------
// Test 8: validate_invalid_settings
// Duplicate break anchors and an inverted day window must produce errors.
// ---------------------------------------------------------------------------

#[test]
fn validate_invalid_settings() {
    let input = r#"{
        "command": "validate",
        "settings": {
            "dayStart": "14:00",
            "dayEnd": "08:00",
            "periodDurationMins": 40,
            "gapBetweenPeriodsMins": 5,
            "breaks": [
                { "name": "Recess", "afterPeriod": 3, "durationMins": 15, "appliesTo": "All" },
                { "name": "Lunch", "afterPeriod": 3, "durationMins": 30, "appliesTo": "All" }
            ],
            "workingDays": ["Monday"]
        }
    }"#;

    let output = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains(r#""ok":true"#))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    let errors = parsed["data"]["errors"].as_array().unwrap();
    assert!(!errors.is_empty(), "Invalid settings must report errors");
}

// ---------------------------------------------------------------------------
// Test 9: invalid_json_input
// Malformed JSON must make the binary exit with code 1 and ok:false.
// ---------------------------------------------------------------------------

#[test]
fn invalid_json_input() {
    let input = r#"{ this is not valid json "#;

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(contains(r#""ok":false"#))
        .stdout(contains("error"));
}

// ---------------------------------------------------------------------------
// Test 10: unknown_command
// JSON with an unknown command value must be handled gracefully (ok:false).
// ---------------------------------------------------------------------------

#[test]
fn unknown_command() {
    let input = format!(
        r#"{{"command":"unknownCommand","settings":{}}}"#,
        STANDARD_SETTINGS
    );

    cmd()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(contains(r#""ok":false"#))
        .stdout(contains("error"));
}
