//! Passcode entry state machine.
//!
//! Digits accumulate while `Locked`; the moment the code is full the session
//! moves to `Evaluating` and stops accepting input until the evaluator
//! either rejects (back to `Locked`, digits cleared) or unlocks. Every guard
//! is a silent no-op — wrong-state input never errors, it just disappears.

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Evaluating,
    Unlocked,
}

/// What a single digit press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Entry {
    /// Digit stored, code not yet full.
    Accepted,
    /// Digit stored and the code is now full; evaluation should be armed.
    Completed,
    /// Dropped: wrong state, non-digit, or code already full.
    Ignored,
}

#[derive(Debug)]
pub struct PasscodeSession {
    digits: String,
    code_length: u8,
    state: LockState,
}

impl PasscodeSession {
    pub fn new(code_length: u8) -> Self {
        Self {
            digits: String::new(),
            code_length,
            state: LockState::Locked,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn filled(&self) -> usize {
        self.digits.len()
    }

    pub fn capacity(&self) -> usize {
        self.code_length as usize
    }

    pub fn append_digit(&mut self, digit: char) -> Entry {
        if self.state != LockState::Locked || !digit.is_ascii_digit() {
            return Entry::Ignored;
        }
        if self.digits.len() >= self.capacity() {
            return Entry::Ignored;
        }
        self.digits.push(digit);
        if self.digits.len() == self.capacity() {
            self.state = LockState::Evaluating;
            Entry::Completed
        } else {
            Entry::Accepted
        }
    }

    /// Empty the entered digits. An `Evaluating` session returns to
    /// `Locked`; an `Unlocked` one stays unlocked.
    pub fn clear(&mut self) {
        self.digits.clear();
        if self.state == LockState::Evaluating {
            self.state = LockState::Locked;
        }
    }

    pub fn delete_last(&mut self) {
        if self.state == LockState::Locked {
            self.digits.pop();
        }
    }

    /// The full code, readable only while evaluation is pending.
    pub fn pending_code(&self) -> Option<&str> {
        (self.state == LockState::Evaluating).then_some(self.digits.as_str())
    }

    /// Evaluator verdict: attempt rejected, stay locked with an empty code.
    pub fn reject(&mut self) {
        self.digits.clear();
        self.state = LockState::Locked;
    }

    /// Evaluator verdict: unlocked. Digits reset per the lock/unlock
    /// transition invariant.
    pub fn unlock(&mut self) {
        self.digits.clear();
        self.state = LockState::Unlocked;
    }

    /// Back to the lockscreen, picking up the (possibly changed) code
    /// length for the next attempt.
    pub fn relock(&mut self, code_length: u8) {
        self.digits.clear();
        self.code_length = code_length;
        self.state = LockState::Locked;
    }

    /// Changing the length mid-entry clears what was typed so a stale
    /// prefix can never complete against the new length.
    pub fn set_code_length(&mut self, code_length: u8) {
        self.code_length = code_length;
        self.digits.clear();
        if self.state == LockState::Evaluating {
            self.state = LockState::Locked;
        }
    }
}
