//! Command dispatcher
//!
//! Maps decoded 32-bit codes to vehicle actions through one explicit table.
//! Lookup is total: a code missing from the table dispatches
//! [`Action::Stop`].

use crate::ir::Command;
use crate::motor::DirectionPattern;

/// Codes sent by the stock remote (MSB-first)
pub mod codes {
    pub const UP: u32 = 0x61A0_42BD;
    pub const DOWN: u32 = 0x61A0_C23D;
    pub const RIGHT: u32 = 0x61A0_A857;
    pub const LEFT: u32 = 0x61A0_6897;
    pub const CHANNEL_UP: u32 = 0x61A0_50AF;
    pub const CHANNEL_DOWN: u32 = 0x61A0_D02F;
    pub const MUTE: u32 = 0x61A0_708F;
}

/// Vehicle action selected by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    SpeedUp,
    SlowDown,
    ToggleAccessory,
    /// Also the fallback for unknown codes
    Stop,
}

impl Action {
    /// Status text shown for this action
    pub const fn label(self) -> &'static str {
        match self {
            Action::Forward => "Forward",
            Action::Backward => "Reverse",
            Action::Left => "Left",
            Action::Right => "Right",
            Action::SpeedUp => "Speed up",
            Action::SlowDown => "Slow down",
            Action::ToggleAccessory => "Lights",
            Action::Stop => "Stopped",
        }
    }

    /// Direction pattern for motion actions, `None` for the rest
    pub const fn direction(self) -> Option<DirectionPattern> {
        match self {
            Action::Forward => Some(DirectionPattern::FORWARD),
            Action::Backward => Some(DirectionPattern::BACKWARD),
            Action::Left => Some(DirectionPattern::PIVOT_LEFT),
            Action::Right => Some(DirectionPattern::PIVOT_RIGHT),
            Action::Stop => Some(DirectionPattern::STOP),
            Action::SpeedUp | Action::SlowDown | Action::ToggleAccessory => None,
        }
    }
}

/// Number of known codes
pub const TABLE_LEN: usize = 7;

/// Fixed code → action table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTable {
    entries: [(u32, Action); TABLE_LEN],
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::STOCK_REMOTE
    }
}

impl CommandTable {
    /// Table for the stock remote
    pub const STOCK_REMOTE: Self = Self::new([
        (codes::UP, Action::Forward),
        (codes::DOWN, Action::Backward),
        (codes::RIGHT, Action::Right),
        (codes::LEFT, Action::Left),
        (codes::CHANNEL_UP, Action::SpeedUp),
        (codes::CHANNEL_DOWN, Action::SlowDown),
        (codes::MUTE, Action::ToggleAccessory),
    ]);

    /// Build a table from (code, action) entries
    ///
    /// If a code appears twice the first entry wins.
    pub const fn new(entries: [(u32, Action); TABLE_LEN]) -> Self {
        Self { entries }
    }

    /// Exact-match lookup, `None` for unknown codes
    pub fn lookup(&self, command: Command) -> Option<Action> {
        self.entries
            .iter()
            .find(|(code, _)| *code == command.code())
            .map(|&(_, action)| action)
    }

    /// Action for `command`; unknown codes stop the vehicle
    #[inline]
    pub fn dispatch(&self, command: Command) -> Action {
        self.lookup(command).unwrap_or(Action::Stop)
    }

    pub fn entries(&self) -> &[(u32, Action)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_codes_dispatch() {
        let table = CommandTable::default();
        let cases = [
            (codes::UP, Action::Forward),
            (codes::DOWN, Action::Backward),
            (codes::RIGHT, Action::Right),
            (codes::LEFT, Action::Left),
            (codes::CHANNEL_UP, Action::SpeedUp),
            (codes::CHANNEL_DOWN, Action::SlowDown),
            (codes::MUTE, Action::ToggleAccessory),
        ];
        for (code, action) in cases {
            assert_eq!(table.dispatch(Command::new(code)), action);
        }
    }

    #[test]
    fn unknown_codes_stop() {
        let table = CommandTable::default();
        for code in [0, u32::MAX, 0x61A0_42BC, 0x61A0_42BD ^ 0x8000_0000] {
            assert_eq!(table.lookup(Command::new(code)), None);
            assert_eq!(table.dispatch(Command::new(code)), Action::Stop);
        }
    }

    #[test]
    fn dispatch_is_total_across_sampled_codes() {
        let table = CommandTable::default();
        let mut code: u32 = 1;
        // xorshift walk over the code space
        for _ in 0..10_000 {
            code ^= code << 13;
            code ^= code >> 17;
            code ^= code << 5;
            let action = table.dispatch(Command::new(code));
            match table.lookup(Command::new(code)) {
                Some(expected) => assert_eq!(action, expected),
                None => assert_eq!(action, Action::Stop),
            }
        }
    }

    #[test]
    fn stock_codes_are_distinct() {
        let entries = CommandTable::STOCK_REMOTE.entries();
        for (i, (a, _)) in entries.iter().enumerate() {
            for (b, _) in &entries[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn labels_and_directions() {
        assert_eq!(Action::Backward.label(), "Reverse");
        assert_eq!(Action::ToggleAccessory.label(), "Lights");
        assert_eq!(Action::Stop.label(), "Stopped");
        assert_eq!(Action::Forward.direction(), Some(DirectionPattern::FORWARD));
        assert_eq!(Action::Stop.direction(), Some(DirectionPattern::STOP));
        assert_eq!(Action::SpeedUp.direction(), None);
    }
}
