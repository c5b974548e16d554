//! Match flow state machine
//!
//! Tracks where a match is between the first serve and the replay menu.

use serde::{Deserialize, Serialize};

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Playing,
    /// A side reached the target score; the result is on display
    GameOver,
    /// Waiting for the next match length, or quit
    ReplayMenu,
    Exited,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Win,
    HoldElapsed,
    PlayAgain,
    Quit,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: MatchPhase,
    pub to: MatchPhase,
    pub action: MatchAction,
}

/// Match finite state machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Playing,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; invalid actions leave the phase unchanged
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                log::debug!("match phase {:?} -> {:?} on {:?}", from, to, action);
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.phase, action) {
            (MatchPhase::Playing, MatchAction::Win) => Some(MatchPhase::GameOver),

            (MatchPhase::GameOver, MatchAction::HoldElapsed) => Some(MatchPhase::ReplayMenu),
            (MatchPhase::GameOver, MatchAction::Quit) => Some(MatchPhase::Exited),

            (MatchPhase::ReplayMenu, MatchAction::PlayAgain) => Some(MatchPhase::Playing),
            (MatchPhase::ReplayMenu, MatchAction::Quit) => Some(MatchPhase::Exited),

            _ => None,
        }
    }

    /// Back to Playing for a fresh match
    pub fn reset(&mut self) {
        self.phase = MatchPhase::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    /// True once the match has been decided, including the menu and exit that follow
    pub fn is_game_over(&self) -> bool {
        !self.is_playing()
    }

    pub fn is_menu_showing(&self) -> bool {
        self.phase == MatchPhase::ReplayMenu
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
