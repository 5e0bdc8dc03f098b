use super::zodiac::{sign_for, sign_from_code};
use super::{notes_narrative, Attempt, Evaluator, Outcome};
use crate::settings::Settings;

fn settings() -> Settings {
    Settings::default()
}

#[test]
fn result_preserves_sign_and_magnitude() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.reference_number = 1000;
    match evaluator.evaluate("1234", &cfg) {
        Outcome::Unlocked { result, .. } => assert_eq!(result, 234),
        other => panic!("expected unlock, got {other:?}"),
    }
}

#[test]
fn all_zero_code_goes_negative() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.reference_number = 4050;
    match evaluator.evaluate("000000", &cfg) {
        Outcome::Unlocked { result, .. } => assert_eq!(result, -4050),
        other => panic!("expected unlock, got {other:?}"),
    }
}

#[test]
fn negative_reference_adds() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.reference_number = -42;
    match evaluator.evaluate("0100", &cfg) {
        Outcome::Unlocked { result, .. } => assert_eq!(result, 142),
        other => panic!("expected unlock, got {other:?}"),
    }
}

#[test]
fn forced_errors_reject_then_unlock() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.forced_errors = 2;
    cfg.reference_number = 1000;

    assert!(matches!(
        evaluator.evaluate("1111", &cfg),
        Outcome::Rejected { .. }
    ));
    assert_eq!(evaluator.history().len(), 1);
    assert!(matches!(
        evaluator.evaluate("2222", &cfg),
        Outcome::Rejected { .. }
    ));
    assert_eq!(evaluator.history().len(), 2);

    match evaluator.evaluate("3000", &cfg) {
        Outcome::Unlocked {
            result, history, ..
        } => {
            assert_eq!(result, 2000);
            assert_eq!(history.len(), 2);
        }
        other => panic!("expected unlock, got {other:?}"),
    }
}

#[test]
fn classification_is_forced_until_quota_met() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.forced_errors = 1;
    assert_eq!(
        evaluator.classify(&cfg),
        Attempt::ForcedError { first: true }
    );
    let _ = evaluator.evaluate("9999", &cfg);
    assert_eq!(evaluator.classify(&cfg), Attempt::Normal);
}

#[test]
fn first_forced_error_reveals_zodiac_when_code_is_a_date() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.forced_errors = 2;
    // 25th of December.
    match evaluator.evaluate("2512", &cfg) {
        Outcome::Rejected { reveal } => assert_eq!(reveal, "Capricorn"),
        other => panic!("expected rejection, got {other:?}"),
    }
    // Second forced error records raw digits even if they form a date.
    match evaluator.evaluate("2103", &cfg) {
        Outcome::Rejected { reveal } => assert_eq!(reveal, "2103"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn non_date_first_error_falls_back_to_raw_code() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.forced_errors = 1;
    match evaluator.evaluate("9913", &cfg) {
        Outcome::Rejected { reveal } => assert_eq!(reveal, "9913"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn detected_sign_survives_until_unlock() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.forced_errors = 1;
    cfg.reference_number = 0;
    let _ = evaluator.evaluate("2512", &cfg);
    match evaluator.evaluate("1234", &cfg) {
        Outcome::Unlocked { sign, .. } => assert_eq!(sign, Some("Capricorn")),
        other => panic!("expected unlock, got {other:?}"),
    }
}

#[test]
fn reset_clears_counter_history_and_sign() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.forced_errors = 1;
    let _ = evaluator.evaluate("2512", &cfg);
    evaluator.reset();
    assert_eq!(evaluator.forced_seen(), 0);
    assert!(evaluator.history().is_empty());
    assert_eq!(
        evaluator.classify(&cfg),
        Attempt::ForcedError { first: true }
    );
}

#[test]
fn deactivated_profile_unlocks_plain() {
    let mut evaluator = Evaluator::new();
    let mut cfg = settings();
    cfg.activated = false;
    assert_eq!(evaluator.evaluate("1234", &cfg), Outcome::Plain);
}

#[test]
fn zodiac_fixed_points() {
    assert_eq!(sign_for(25, 12), Some("Capricorn"));
    assert_eq!(sign_for(1, 1), Some("Capricorn"));
    assert_eq!(sign_for(21, 3), Some("Aries"));
    assert_eq!(sign_for(20, 3), Some("Pisces"));
    assert_eq!(sign_for(22, 12), Some("Capricorn"));
    assert_eq!(sign_for(19, 1), Some("Capricorn"));
    assert_eq!(sign_for(20, 1), Some("Aquarius"));
}

#[test]
fn zodiac_rejects_impossible_dates() {
    assert_eq!(sign_for(32, 13), None);
    assert_eq!(sign_for(0, 1), None);
    assert_eq!(sign_for(31, 4), None);
    assert_eq!(sign_for(30, 2), None);
}

#[test]
fn zodiac_from_code_parses_ddmm_prefix() {
    assert_eq!(sign_from_code("2512"), Some("Capricorn"));
    assert_eq!(sign_from_code("251299"), Some("Capricorn"));
    assert_eq!(sign_from_code("3213"), None);
    assert_eq!(sign_from_code("21"), None);
}

#[test]
fn narrative_uses_spectator_name_and_sign() {
    let mut cfg = settings();
    cfg.spectator_name = "Dana".into();
    let text = notes_narrative(234, &cfg, Some("Aries"));
    assert!(text.contains("Dana"));
    assert!(text.contains("234"));
    assert!(text.contains("Aries"));
}

#[test]
fn narrative_has_fallback_for_missing_name() {
    let text = notes_narrative(-5, &settings(), None);
    assert!(text.contains("my friend"));
    assert!(text.contains("-5"));
}
