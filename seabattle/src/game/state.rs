// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! The stack of phases and menus the game moves through.
//!
//! Entering a screen pushes it; leaving pops it, returning to whatever was showing
//! before. The bottom of the stack is always [`GameState::Quitting`], so leaving the main
//! menu ends the program.

/// A phase of a match, or a menu screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameState {
    /// Bottom-of-stack marker. Reaching it ends the program.
    Quitting,
    MainMenu,
    /// The in-match menu.
    GameMenu,
    Settings,
    Rules,
    Controls,
    /// Volume menu. Opened from either the main or the game menu; see
    /// [`StateStack::return_to`].
    VolumeAdjust,
    HighScores,
    /// Players are placing their ships.
    Deploying,
    /// Players are firing at each other.
    Discovering,
    /// A player has won.
    EndingGame,
}

impl GameState {
    /// Whether this state is part of a match rather than a menu.
    pub fn is_match_phase(self) -> bool {
        match self {
            GameState::Deploying | GameState::Discovering | GameState::EndingGame => true,
            _ => false,
        }
    }
}

/// A state on the stack, with the state it returns to when popped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Frame {
    state: GameState,
    return_to: Option<GameState>,
}

/// Stack of [`GameState`]s.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StateStack {
    frames: Vec<Frame>,
}

impl StateStack {
    /// A stack showing the main menu, above the quitting marker.
    pub fn new() -> Self {
        Self {
            frames: vec![
                Frame {
                    state: GameState::Quitting,
                    return_to: None,
                },
                Frame {
                    state: GameState::MainMenu,
                    return_to: Some(GameState::Quitting),
                },
            ],
        }
    }

    /// The state at the top of the stack.
    pub fn current(&self) -> GameState {
        self.frames
            .last()
            .map_or(GameState::Quitting, |frame| frame.state)
    }

    /// The state that was current when the top state was pushed, and which popping it
    /// will return to. `None` only for the quitting marker.
    pub fn return_to(&self) -> Option<GameState> {
        self.frames.last().and_then(|frame| frame.return_to)
    }

    /// Returns true once the main menu has been left.
    pub fn is_quitting(&self) -> bool {
        self.current() == GameState::Quitting
    }

    /// Number of states on the stack, including the quitting marker.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if `state` is anywhere on the stack.
    pub fn contains(&self, state: GameState) -> bool {
        self.frames.iter().any(|frame| frame.state == state)
    }

    /// Enter `state`, remembering the current state to return to.
    pub fn push(&mut self, state: GameState) {
        let return_to = Some(self.current());
        self.frames.push(Frame { state, return_to });
    }

    /// Leave the current state. The quitting marker is never removed; popping it returns
    /// `None`.
    pub fn pop(&mut self) -> Option<GameState> {
        if self.frames.len() <= 1 {
            None
        } else {
            self.frames.pop().map(|frame| frame.state)
        }
    }

    /// Replace the current state with `state`. The new state returns to the same place
    /// the old one would have.
    pub fn switch(&mut self, state: GameState) -> Option<GameState> {
        let previous = self.pop();
        self.push(state);
        previous
    }

    /// Pop states until `state` is current. Returns false, leaving the stack unchanged,
    /// if `state` is not on the stack.
    pub fn unwind_to(&mut self, state: GameState) -> bool {
        if !self.contains(state) {
            return false;
        }
        while self.current() != state {
            self.frames.pop();
        }
        true
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_main_menu_above_quitting() {
        let mut stack = StateStack::new();
        assert_eq!(stack.current(), GameState::MainMenu);
        assert_eq!(stack.return_to(), Some(GameState::Quitting));
        assert_eq!(stack.pop(), Some(GameState::MainMenu));
        assert!(stack.is_quitting());
        assert_eq!(stack.pop(), None);
        assert!(stack.is_quitting());
    }

    #[test]
    fn volume_menu_remembers_its_parent() {
        let mut stack = StateStack::new();
        stack.push(GameState::VolumeAdjust);
        assert_eq!(stack.return_to(), Some(GameState::MainMenu));
        stack.pop();

        stack.push(GameState::Deploying);
        stack.switch(GameState::Discovering);
        stack.push(GameState::GameMenu);
        stack.push(GameState::VolumeAdjust);
        assert_eq!(stack.return_to(), Some(GameState::GameMenu));
        assert_eq!(stack.pop(), Some(GameState::VolumeAdjust));
        assert_eq!(stack.current(), GameState::GameMenu);
        assert_eq!(stack.pop(), Some(GameState::GameMenu));
        assert_eq!(stack.current(), GameState::Discovering);
    }

    #[test]
    fn switch_keeps_the_return_target() {
        let mut stack = StateStack::new();
        stack.push(GameState::Deploying);
        assert_eq!(stack.switch(GameState::Discovering), Some(GameState::Deploying));
        assert_eq!(stack.return_to(), Some(GameState::MainMenu));
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn unwind_stops_at_the_requested_state() {
        let mut stack = StateStack::new();
        stack.push(GameState::Discovering);
        stack.push(GameState::GameMenu);
        stack.push(GameState::VolumeAdjust);
        assert!(stack.unwind_to(GameState::MainMenu));
        assert_eq!(stack.current(), GameState::MainMenu);
        assert!(!stack.unwind_to(GameState::Rules));
        assert_eq!(stack.current(), GameState::MainMenu);
    }
}
