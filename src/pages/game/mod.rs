mod bird;
mod pipe;
mod rect;
mod view;
mod world;

use std::collections::HashMap;

use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Page, PageId};
use crate::{
    action::{Action, GameAction},
    config::PageKeyBindings,
    constants::game,
    pages::game::{
        view::WorldView,
        world::{Phase, World},
    },
};

pub struct GamePage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    world: World,
}

impl GamePage {
    pub fn new() -> Self {
        GamePage { action_tx: None, keymap: PageKeyBindings::default(), world: World::new() }
    }

    fn draw_score(&self, f: &mut Frame<'_>, area: Rect) {
        let style = Style::default().fg(game::TEXT_COLOR).add_modifier(Modifier::BOLD);
        let lines = match self.world.phase() {
            Phase::Active => vec![Line::from(self.world.score().to_string())],
            Phase::Inactive => vec![
                Line::from(format!("Score: {}", self.world.score())),
                Line::from(""),
                Line::from(format!("High Score: {}", self.world.high_score())),
            ],
        };

        let height = (lines.len() as u16).min(area.height.saturating_sub(1));
        let text_area = Rect { x: area.x, y: area.y + 1, width: area.width, height };
        let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
        f.render_widget(paragraph, text_area);
    }
}

impl Page for GamePage {
    fn id(&self) -> PageId {
        PageId::Game
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Game(GameAction::Flap) => self.world.flap(),
            // the tick cadence is the spawn timer
            Action::Tick => self.world.spawn_pipe(&mut rand::thread_rng()),
            Action::Render => self.world.step_frame(),
            _ => {},
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(WorldView::new(&self.world), area);
        self.draw_score(f, area);
        Ok(())
    }
}
