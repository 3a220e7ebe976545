//! Keyboard mapping
//!
//! Keys are identified by their DOM `KeyboardEvent.code` so the layout
//! doesn't matter (WASD on AZERTY still sits under the same fingers).

use crate::sim::{GamePhase, GameState, RestartOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Held
    MoveLeft,
    /// Held
    MoveRight,
    Fire,
    /// Start / restart / next level, depending on phase
    Confirm,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down,
    Up,
}

pub fn key_action(code: &str) -> Option<Action> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Action::MoveLeft),
        "ArrowRight" | "KeyD" => Some(Action::MoveRight),
        "Space" => Some(Action::Fire),
        "Enter" => Some(Action::Confirm),
        "KeyP" => Some(Action::Pause),
        _ => None,
    }
}

/// Apply a key event to the game. Returns whether the key is bound.
pub fn apply_key(state: &mut GameState, code: &str, event: KeyEvent) -> bool {
    let Some(action) = key_action(code) else {
        return false;
    };

    match (action, event) {
        (Action::MoveLeft, event) => state.input.left = event == KeyEvent::Down,
        (Action::MoveRight, event) => state.input.right = event == KeyEvent::Down,
        (_, KeyEvent::Up) => {}
        (Action::Fire, KeyEvent::Down) => state.fire(),
        (Action::Confirm, KeyEvent::Down) => confirm(state),
        (Action::Pause, KeyEvent::Down) => state.toggle_pause(),
    }
    true
}

fn confirm(state: &mut GameState) {
    match state.phase() {
        GamePhase::Start => state.start_game(),
        GamePhase::GameOver => state.restart(RestartOptions::default()),
        GamePhase::Win => state.restart(RestartOptions::next_level()),
        GamePhase::Playing => {}
    }
}

/// Pause an active round when the page is hidden or loses focus.
/// Returns true if this call paused the game.
pub fn auto_pause(state: &mut GameState) -> bool {
    if state.phase() == GamePhase::Playing && !state.is_paused() {
        state.toggle_pause();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    fn new_state() -> GameState {
        GameState::with_seed(Tuning::default(), 1)
    }

    #[test]
    fn test_key_action_mapping() {
        assert_eq!(key_action("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(key_action("KeyA"), Some(Action::MoveLeft));
        assert_eq!(key_action("KeyD"), Some(Action::MoveRight));
        assert_eq!(key_action("Space"), Some(Action::Fire));
        assert_eq!(key_action("Enter"), Some(Action::Confirm));
        assert_eq!(key_action("KeyP"), Some(Action::Pause));
        assert_eq!(key_action("KeyQ"), None);
    }

    #[test]
    fn test_movement_keys_are_held() {
        let mut state = new_state();
        assert!(apply_key(&mut state, "ArrowLeft", KeyEvent::Down));
        assert!(state.input.left);
        apply_key(&mut state, "KeyD", KeyEvent::Down);
        assert!(state.input.right);

        apply_key(&mut state, "ArrowLeft", KeyEvent::Up);
        assert!(!state.input.left);
        assert!(state.input.right);
    }

    #[test]
    fn test_unbound_key() {
        let mut state = new_state();
        assert!(!apply_key(&mut state, "Escape", KeyEvent::Down));
    }

    #[test]
    fn test_enter_walks_phases() {
        let mut state = new_state();
        apply_key(&mut state, "Enter", KeyEvent::Down);
        assert_eq!(state.phase(), GamePhase::Playing);

        // Enter does nothing mid-round
        apply_key(&mut state, "Enter", KeyEvent::Down);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.level(), 1);

        state.phase = GamePhase::Win;
        state.score = 500;
        apply_key(&mut state, "Enter", KeyEvent::Down);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.level(), 2);
        assert_eq!(state.score(), 500);

        state.phase = GamePhase::GameOver;
        apply_key(&mut state, "Enter", KeyEvent::Down);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.level(), 1);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_space_fires_on_key_down_only() {
        let mut state = new_state();
        state.start_game();
        apply_key(&mut state, "Space", KeyEvent::Up);
        assert!(state.player_shots().is_empty());
        apply_key(&mut state, "Space", KeyEvent::Down);
        assert_eq!(state.player_shots().len(), 1);
    }

    #[test]
    fn test_pause_key() {
        let mut state = new_state();
        apply_key(&mut state, "KeyP", KeyEvent::Down);
        assert!(!state.is_paused());

        state.start_game();
        apply_key(&mut state, "KeyP", KeyEvent::Down);
        assert!(state.is_paused());
        apply_key(&mut state, "KeyP", KeyEvent::Down);
        assert!(!state.is_paused());
    }

    #[test]
    fn test_auto_pause() {
        let mut state = new_state();
        assert!(!auto_pause(&mut state));

        state.start_game();
        assert!(auto_pause(&mut state));
        assert!(state.is_paused());
        // Already paused: stays paused
        assert!(!auto_pause(&mut state));
        assert!(state.is_paused());
    }
}
