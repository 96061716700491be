mod game;

use serde::Deserialize;
use strum::Display;

pub use crate::action::game::GameAction;

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    ToggleShowHelp,
    // Page actions
    Game(GameAction),
}

impl Action {
    // page actions display their inner command in the help overlay
    pub fn label(&self) -> String {
        match self {
            Action::Game(action) => action.to_string(),
            action => action.to_string(),
        }
    }
}
