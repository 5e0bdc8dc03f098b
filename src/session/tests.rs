use super::{Entry, LockState, PasscodeSession};

fn feed(session: &mut PasscodeSession, code: &str) -> Vec<Entry> {
    code.chars().map(|d| session.append_digit(d)).collect()
}

#[test]
fn four_digit_code_completes_exactly_once() {
    let mut session = PasscodeSession::new(4);
    let entries = feed(&mut session, "1234");
    let completions = entries
        .iter()
        .filter(|e| matches!(e, Entry::Completed))
        .count();
    assert_eq!(completions, 1);
    assert_eq!(session.state(), LockState::Evaluating);
}

#[test]
fn six_digit_code_completes_exactly_once() {
    let mut session = PasscodeSession::new(6);
    let entries = feed(&mut session, "000000");
    let completions = entries
        .iter()
        .filter(|e| matches!(e, Entry::Completed))
        .count();
    assert_eq!(completions, 1);
    assert_eq!(session.pending_code(), Some("000000"));
}

#[test]
fn digits_past_capacity_are_silently_ignored() {
    let mut session = PasscodeSession::new(4);
    let _ = feed(&mut session, "1234");
    assert_eq!(session.append_digit('5'), Entry::Ignored);
    assert_eq!(session.pending_code(), Some("1234"));
}

#[test]
fn non_digit_input_is_ignored() {
    let mut session = PasscodeSession::new(4);
    assert_eq!(session.append_digit('x'), Entry::Ignored);
    assert_eq!(session.filled(), 0);
}

#[test]
fn clear_returns_evaluating_session_to_locked() {
    let mut session = PasscodeSession::new(4);
    let _ = feed(&mut session, "1234");
    session.clear();
    assert_eq!(session.state(), LockState::Locked);
    assert_eq!(session.filled(), 0);
}

#[test]
fn clear_does_not_relock_an_unlocked_session() {
    let mut session = PasscodeSession::new(4);
    let _ = feed(&mut session, "1234");
    session.unlock();
    session.clear();
    assert_eq!(session.state(), LockState::Unlocked);
}

#[test]
fn delete_last_is_a_noop_when_empty() {
    let mut session = PasscodeSession::new(4);
    session.delete_last();
    assert_eq!(session.filled(), 0);
    let _ = session.append_digit('7');
    session.delete_last();
    assert_eq!(session.filled(), 0);
}

#[test]
fn unlocked_session_ignores_digits() {
    let mut session = PasscodeSession::new(4);
    let _ = feed(&mut session, "1234");
    session.unlock();
    assert_eq!(session.append_digit('1'), Entry::Ignored);
}

#[test]
fn reject_clears_and_relocks() {
    let mut session = PasscodeSession::new(4);
    let _ = feed(&mut session, "1234");
    session.reject();
    assert_eq!(session.state(), LockState::Locked);
    assert_eq!(session.filled(), 0);
    // A fresh full entry completes again.
    let entries = feed(&mut session, "9999");
    assert!(matches!(entries.last(), Some(Entry::Completed)));
}

#[test]
fn changing_code_length_clears_typed_prefix() {
    let mut session = PasscodeSession::new(4);
    let _ = feed(&mut session, "12");
    session.set_code_length(6);
    assert_eq!(session.filled(), 0);
    assert_eq!(session.capacity(), 6);
}

#[test]
fn relock_resets_digits_and_state() {
    let mut session = PasscodeSession::new(4);
    let _ = feed(&mut session, "1234");
    session.unlock();
    session.relock(6);
    assert_eq!(session.state(), LockState::Locked);
    assert_eq!(session.capacity(), 6);
    assert_eq!(session.filled(), 0);
}
