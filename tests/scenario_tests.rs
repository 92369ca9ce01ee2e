//! End-to-end drives through the record parser, sequencer and controller.

use cruise_control::controller::CruiseController;
use cruise_control::core::CruiseMode;
use cruise_control::record::{format_text, parse_records, ParseError};
use cruise_control::sequencer::{SequenceError, Sequencer};
use cruise_control::{run_lines, Error, VehicleSnapshot};

const EPSILON: f64 = 1e-9;

fn final_state(lines: &[&str]) -> VehicleSnapshot {
    *run_lines(lines).unwrap().last().unwrap()
}

fn throttles(lines: &[&str]) -> Vec<f64> {
    run_lines(lines)
        .unwrap()
        .iter()
        .map(|s| s.throttle_position)
        .collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn engage_accelerate_stop_and_resume() {
    let lines = [
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - - - - - - -",
        "- - - - - - - true -",
        "- - - - - true - - -",
        "true 50.0 0.0 0.0 false false false false false",
        "- - - - - - - - true",
    ];

    let throttles = throttles(&lines);
    let expected = [1.0, 1.144, 1.144, 1.144, 0.0, 0.0, 1.144];
    assert_eq!(throttles.len(), expected.len());
    for (actual, expected) in throttles.iter().zip(expected) {
        assert_close(*actual, expected);
    }

    let last = final_state(&lines);
    assert!(!last.start_ccs);
    assert!(!last.resume);
}

#[test]
fn brake_stops_cruising() {
    let last = final_state(&[
        "true 50.0 0.0 0.0 false false false false false",
        "- - - - true - - - -",
        "- - 0.1 - - - - - -",
    ]);

    assert_eq!(last.throttle_position, 0.0);
    assert!(!last.start_ccs);
}

#[test]
fn engine_off_stops_cruising() {
    let last = final_state(&[
        "true 50.0 0.0 0.0 false false false false false",
        "- - - - true - - - -",
        "false - - - - - - - -",
    ]);

    assert_eq!(last.throttle_position, 0.0);
    assert!(!last.engine_on);
    assert!(!last.start_ccs);
}

#[test]
fn pedal_lowered_below_set_point_restores_cruise_value() {
    let last = final_state(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - 1.5 - - - - -",
        "- - - 0.5 - - - - -",
    ]);
    assert_close(last.throttle_position, 1.0);

    let last = final_state(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - 1.2 - - - - -",
        "- - - 0.0 - - - - -",
    ]);
    assert_close(last.throttle_position, 1.0);
}

#[test]
fn pedal_above_set_point_takes_over() {
    let last = final_state(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - 1.8 - - - - -",
        "- - - 1.9 - - - - -",
    ]);
    assert_close(last.throttle_position, 1.9);

    let last = final_state(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - 1.2 - - - - -",
        "- - - - - - - - -",
        "- - - - - - - - -",
    ]);
    assert_close(last.throttle_position, 1.2);
}

#[test]
fn start_ccs_with_light_pedal_holds_cruise_throttle() {
    let last = final_state(&[
        "true 50.0 0.0 0.5 false false false false false",
        "- - - - true - - - -",
    ]);

    assert!(last.start_ccs);
    assert!(!last.stop_ccs);
    assert_eq!(last.throttle_position, 1.0);
}

#[test]
fn start_ccs_again_after_stop() {
    let last = final_state(&[
        "true 50.0 0.0 0.5 false false false false false",
        "- - - - true - - - -",
        "- - - - - true - - -",
        "- - - - true - - - -",
    ]);

    assert!(last.start_ccs);
    assert!(!last.stop_ccs);
    assert_eq!(last.throttle_position, 1.0);
}

#[test]
fn start_ccs_refused_without_preconditions() {
    let engine_off = final_state(&[
        "false 50.0 0.0 0.5 false false false false false",
        "- - - - true - - - -",
    ]);
    assert!(!engine_off.start_ccs);
    assert_eq!(engine_off.throttle_position, 0.5);

    let too_slow = final_state(&[
        "true 39.0 0.0 0.5 false false false false false",
        "- - - - true - - - -",
    ]);
    assert!(!too_slow.start_ccs);
    assert_eq!(too_slow.throttle_position, 0.5);

    let braking = final_state(&[
        "true 50.0 0.5 0.0 false false false false false",
        "- - - - true - - - -",
    ]);
    assert!(!braking.start_ccs);
    assert_eq!(braking.throttle_position, 0.0);
}

#[test]
fn button_acceleration_ramps_and_freezes() {
    let last = final_state(&[
        "true 50.0 0.0 1.0 false false false false false",
        "- - - - true - - - -",
        "- - - - - - true - -",
    ]);
    assert_close(last.throttle_position, 1.144);

    let last = final_state(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - - - - - true -",
    ]);
    assert_close(last.throttle_position, 1.144);
    assert!(!last.start_accelerating);
    assert!(!last.stop_accelerating);
}

#[test]
fn pedal_during_button_acceleration_keeps_ramp() {
    let last = final_state(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - 0.5 - - - - -",
    ]);
    assert_close(last.throttle_position, 1.144);
}

#[test]
fn explicit_stop_hands_throttle_back_to_pedal() {
    let last = final_state(&[
        "true 50.0 0.0 0.0 false false false false false",
        "- - - - true - - - -",
        "- - - - - true - - -",
    ]);
    assert_eq!(last.throttle_position, 0.0);
    assert!(!last.start_ccs && !last.stop_ccs);

    let last = final_state(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - 1.5 - - - - -",
        "- - - - - true - - -",
    ]);
    assert_eq!(last.throttle_position, 1.5);
}

#[test]
fn explicit_stop_disengages_controller() {
    let records = parse_records([
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - true - - -",
        "- - - 0.8 - - - - -",
    ])
    .unwrap();

    let run = Sequencer::default().run(&records).unwrap();
    assert!(!run.final_state().is_active());
    assert_eq!(run.final_snapshot().unwrap().throttle_position, 0.8);
    assert_eq!(run.final_state().recorded_cruise_throttle(), 1.0);
}

#[test]
fn resume_without_prior_cruise_uses_current_speed() {
    let records = parse_records([
        "true 60.0 0.0 0.0 false false false false false",
        "- - - - - - - - true",
    ])
    .unwrap();

    let run = Sequencer::default().run(&records).unwrap();
    let last = run.final_snapshot().unwrap();
    assert_close(last.throttle_position, 1.2);
    assert!(!last.start_ccs);
    assert!(run.final_state().is_active());
    assert!(run.final_state().resumed());
}

#[test]
fn resume_leaves_start_ccs_indicator_off() {
    let snapshots = run_lines([
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - - - - - true -",
        "- - - - - true - - -",
        "true 50.0 0.0 0.0 false false false false false",
        "- - - - - - - - true",
        "- - - - - - - - -",
    ])
    .unwrap();

    let text = format_text(&snapshots);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[5],
        "true 50.000000 0.000000 0.000000 false false false false false 1.144000"
    );
    assert_eq!(
        lines[6],
        "true 50.000000 0.000000 0.000000 false false false false false 1.144000"
    );
}

#[test]
fn resumed_cruising_lapses_when_speed_drops() {
    let throttles = throttles(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - true - - -",
        "- - - - - - - - true",
        "- 45.0 - 0.3 - - - - -",
    ]);

    let expected = [1.0, 0.0, 1.0, 0.3];
    for (actual, expected) in throttles.iter().zip(expected) {
        assert_close(*actual, expected);
    }
}

#[test]
fn pedal_held_through_button_ramp_keeps_new_set_point() {
    let throttles = throttles(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - 0.5 - - - - -",
        "- - - - - - true - -",
        "- - - - - - - true -",
        "- - - - - - - - -",
        "- - - 0.0 - - - - -",
        "- - - - - - - - -",
    ]);

    let expected = [1.0, 1.0, 1.144, 1.144, 1.144, 1.144, 1.144];
    assert_eq!(throttles.len(), expected.len());
    for (actual, expected) in throttles.iter().zip(expected) {
        assert_close(*actual, expected);
    }
}

#[test]
fn resumed_cruising_holds_until_brake() {
    let throttles = throttles(&[
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - - - - - true -",
        "- - 0.3 - - - - - -",
        "- - 0.0 - - - - - true",
        "- - - - - - - - -",
        "- - 0.2 - - - - - -",
    ]);

    let expected = [1.0, 1.144, 1.144, 0.0, 1.144, 1.144, 0.0];
    for (actual, expected) in throttles.iter().zip(expected) {
        assert_close(*actual, expected);
    }
}

#[test]
fn output_matches_line_format() {
    let snapshots = run_lines([
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - - - - - - -",
        "- - - - - - - true -",
        "- - - - - true - - -",
        "- - - - - - - - true",
    ])
    .unwrap();

    let expected = "true 50.000000 0.000000 0.000000 true false false false false 1.000000\n\
                    true 50.000000 0.000000 0.000000 true false true false false 1.144000\n\
                    true 50.000000 0.000000 0.000000 true false true false false 1.144000\n\
                    true 50.000000 0.000000 0.000000 true false false false false 1.144000\n\
                    true 50.000000 0.000000 0.000000 false false false false false 0.000000\n\
                    true 50.000000 0.000000 0.000000 false false false false false 1.144000\n";
    assert_eq!(format_text(&snapshots), expected);
}

#[test]
fn manual_drive_matches_line_format() {
    let snapshots = run_lines([
        "true 50.0 0.0 0.5 false false false false false",
        "- - - - true - - - -",
    ])
    .unwrap();

    assert_eq!(
        format_text(&snapshots).trim_end(),
        "true 50.000000 0.000000 0.500000 false false false false false 0.500000\n\
         true 50.000000 0.000000 0.500000 true false false false false 1.000000"
    );
}

#[test]
fn lower_activation_speed_engages_earlier() {
    let records = parse_records([
        "true 42.0 0.0 0.0 false false false false false",
        "- - - - true - - - -",
    ])
    .unwrap();

    let default_run = Sequencer::default().run(&records).unwrap();
    assert!(!default_run.final_state().is_active());

    let controller = CruiseController::builder()
        .activation_speed(40.0)
        .build()
        .unwrap();
    let run = Sequencer::new(controller).run(&records).unwrap();
    assert!(run.final_state().is_active());
    assert_close(run.final_snapshot().unwrap().throttle_position, 0.84);
}

#[test]
fn mode_history_follows_the_drive() {
    let records = parse_records([
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - - - - - true -",
        "- - - 1.5 - - - - -",
        "- - - 0.0 - - - - -",
        "- - 0.1 - - - - - -",
    ])
    .unwrap();

    let run = Sequencer::default().run(&records).unwrap();
    assert_eq!(
        run.history().get_path(),
        vec![
            CruiseMode::Disengaged,
            CruiseMode::Cruising,
            CruiseMode::ButtonAccelerating,
            CruiseMode::Cruising,
            CruiseMode::PedalOverride,
            CruiseMode::Cruising,
            CruiseMode::Disengaged,
        ]
    );
    assert_eq!(run.history().engagements(), 1);
}

#[test]
fn parse_failure_produces_no_output() {
    let result = run_lines([
        "true 50.0 0.0 0.0 true false false false false",
        "- - - - - - true - -",
        "- - - fast - - - - -",
    ]);

    match result {
        Err(Error::Parse(ParseError::InvalidTokens { line, errors })) => {
            assert_eq!(line, 3);
            assert_eq!(errors.len(), 1);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn incomplete_first_record_is_fatal() {
    let result = run_lines(["true 50.0 - 0.0 true false false false -"]);

    assert_eq!(
        result,
        Err(Error::Sequence(SequenceError::IncompleteInitialRecord {
            missing: vec!["brake_position", "resume"],
        }))
    );
}

#[test]
fn demo_input_runs_end_to_end() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/resume-cruising.txt");
    let text = std::fs::read_to_string(path).unwrap();

    let throttles: Vec<f64> = run_lines(text.lines())
        .unwrap()
        .iter()
        .map(|s| s.throttle_position)
        .collect();

    let expected = [1.0, 1.144, 1.144, 1.144, 0.0, 1.144, 0.0];
    assert_eq!(throttles.len(), expected.len());
    for (actual, expected) in throttles.iter().zip(expected) {
        assert_close(*actual, expected);
    }
}
