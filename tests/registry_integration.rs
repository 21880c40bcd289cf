//! Integration tests for the engine option table
//!
//! Drives the full registry the way a GUI would: announce, then a series of
//! `setoption` assignments, checking both stored values and the subsystem
//! calls they trigger.

mod common;

use common::{init_logging, recording_subsystems};
use uci_options::options::registrations::{self, MAX_HASH_MB};
use uci_options::{AssignError, OptionKind};

#[test]
fn test_announcement_matches_registration_order() {
    init_logging();
    let (_, subsystems) = recording_subsystems();
    let registry = registrations::init(&subsystems).unwrap();

    let announced = registry.to_string();
    let lines: Vec<_> = announced.lines().collect();

    assert_eq!(lines.len(), 40);
    assert_eq!(lines[0], "option name Debug Log File type string default ");
    assert_eq!(lines[1], "option name Contempt type spin default 24 min -100 max 100");
    assert_eq!(
        lines[2],
        "option name Analysis Contempt type combo default Both var Off var White var Black var Both"
    );
    assert_eq!(lines[3], "option name Threads type spin default 1 min 1 max 512");
    assert_eq!(
        lines[4],
        format!("option name Hash type spin default 16 min 1 max {MAX_HASH_MB}")
    );
    assert_eq!(lines[5], "option name Clear Hash type button");
    assert_eq!(lines[6], "option name Ponder type check default false");
    assert_eq!(lines[18], "option name SyzygyPath type string default <empty>");
    assert_eq!(
        lines[39],
        "option name Use Classical Evaluation type check default true"
    );
}

#[test]
fn test_announcement_is_stable_across_assignments() {
    let (_, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();
    let before = registry.to_string();

    registry.set("Hash", "512").unwrap();
    registry.set("ponder", "true").unwrap();

    // Announcements carry defaults, not current values
    assert_eq!(registry.to_string(), before);
}

#[test]
fn test_hooks_reach_subsystems() {
    init_logging();
    let (recorder, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();
    assert!(recorder.take().is_empty());

    registry.set("Hash", "128").unwrap();
    registry.set("threads", "8").unwrap();
    registry.set("Clear Hash", "").unwrap();
    registry.set("SyzygyPath", "/tb/wdl:/tb/dtz").unwrap();
    registry.set("Book2 File", "gm2600.bin").unwrap();
    registry.set("Experience File", "mine.exp").unwrap();
    registry.set("Use NNUE Evaluation", "false").unwrap();
    registry.set("Debug Log File", "io.log").unwrap();

    assert_eq!(
        recorder.take(),
        vec![
            "hash 128",
            "threads 8",
            "clear",
            "tablebases /tb/wdl:/tb/dtz",
            "book2 gm2600.bin",
            "experience",
            "eval",
            "log io.log",
        ]
    );
}

#[test]
fn test_options_without_hooks_stay_silent() {
    let (recorder, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();

    registry.set("MultiPV", "4").unwrap();
    registry.set("UCI_Chess960", "true").unwrap();
    registry.set("Analysis Contempt", "black").unwrap();
    registry.set("Book1", "true").unwrap();

    assert!(recorder.take().is_empty());
    assert_eq!(registry.get("MultiPV").unwrap().as_int(), 4);
    assert!(registry.get("UCI_Chess960").unwrap().as_bool());
    assert!(registry.get("Analysis Contempt").unwrap().matches("Black"));
    assert!(registry.get("book1").unwrap().as_bool());
}

#[test]
fn test_rejections_change_nothing() {
    let (recorder, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();

    assert!(matches!(
        registry.set("Hash", "0"),
        Err(AssignError::OutOfRange { .. })
    ));
    assert!(matches!(
        registry.set("Threads", "513"),
        Err(AssignError::OutOfRange { .. })
    ));
    assert_eq!(
        registry.set("SyzygyPath", ""),
        Err(AssignError::Empty { kind: OptionKind::Text })
    );
    assert!(matches!(
        registry.set("Use NNUE Evaluation", "off"),
        Err(AssignError::NotBoolean(_))
    ));
    assert!(matches!(
        registry.set("Analysis Contempt", "var"),
        Err(AssignError::UnknownChoice(_))
    ));
    assert!(matches!(
        registry.set("Skill Level", "21"),
        Err(AssignError::OutOfRange { .. })
    ));

    assert!(recorder.take().is_empty());
    assert_eq!(registry.get("Hash").unwrap().as_int(), 16);
    assert_eq!(registry.get("Threads").unwrap().as_int(), 1);
    assert_eq!(registry.get("SyzygyPath").unwrap().as_str(), "<empty>");
    assert!(registry.get("Use NNUE Evaluation").unwrap().as_bool());
    assert_eq!(registry.get("Skill Level").unwrap().as_int(), 20);
}

#[test]
fn test_spin_bounds_for_every_spin_option() {
    let (_, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();

    let spins: Vec<(String, i64, i64)> = registry
        .list_all()
        .into_iter()
        .filter_map(|(name, setting)| match setting.value() {
            uci_options::options::OptionValue::Spin { min, max, .. } => {
                Some((name.to_string(), *min, *max))
            }
            _ => None,
        })
        .collect();
    assert_eq!(spins.len(), 16);

    for (name, min, max) in spins {
        registry.set(&name, &min.to_string()).unwrap();
        assert_eq!(registry.get(&name).unwrap().as_int(), min, "{name} at min");

        registry.set(&name, &max.to_string()).unwrap();
        assert_eq!(registry.get(&name).unwrap().as_int(), max, "{name} at max");

        assert!(registry.set(&name, &(min - 1).to_string()).is_err());
        assert!(registry.set(&name, &(max + 1).to_string()).is_err());
        assert_eq!(registry.get(&name).unwrap().as_int(), max, "{name} unchanged");
    }
}

#[test]
fn test_resending_same_value_repeats_hook() {
    let (recorder, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();

    registry.set("Hash", "64").unwrap();
    registry.set("HASH", "64").unwrap();

    assert_eq!(registry.get("hash").unwrap().as_int(), 64);
    assert_eq!(recorder.take(), vec!["hash 64", "hash 64"]);
}

#[test]
fn test_case_insensitive_lookup_returns_same_entry() {
    let (_, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();

    registry.set("hash", "32").unwrap();
    for spelling in ["Hash", "hash", "HASH", "hAsH"] {
        let setting = registry.get(spelling).unwrap();
        assert_eq!(setting.index(), Some(4));
        assert_eq!(setting.as_int(), 32);
    }
}

#[test]
fn test_unknown_option() {
    let (recorder, subsystems) = recording_subsystems();
    let mut registry = registrations::init(&subsystems).unwrap();

    assert_eq!(
        registry.set("Hash Size", "64"),
        Err(AssignError::UnknownOption("Hash Size".to_string()))
    );
    assert_eq!(registry.count(), 40);
    assert!(recorder.take().is_empty());
}
