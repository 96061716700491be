use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::constants::game;
use crate::pages::game::{rect::Rect as WorldRect, world::World};

pub struct WorldView<'a> {
    world: &'a World,
}

impl<'a> WorldView<'a> {
    pub fn new(world: &'a World) -> Self {
        WorldView { world }
    }

    // world rectangle to whole cells, clipped to the area
    fn cell_rect(world_rect: &WorldRect, area: Rect) -> Rect {
        let sx = area.width as f32 / game::WORLD_WIDTH;
        let sy = area.height as f32 / game::WORLD_HEIGHT;

        let left = (world_rect.left() * sx).round().max(0.0) as u16;
        let right = ((world_rect.right() * sx).round().max(0.0) as u16).min(area.width);
        let top = (world_rect.top() * sy).round().max(0.0) as u16;
        let bottom = ((world_rect.bottom() * sy).round().max(0.0) as u16).min(area.height);

        if right <= left || bottom <= top || left >= area.width || top >= area.height {
            return Rect::ZERO;
        }
        Rect { x: area.x + left, y: area.y + top, width: right - left, height: bottom - top }
    }

    fn fill(world_rect: &WorldRect, color: ratatui::style::Color, area: Rect, buf: &mut Buffer) {
        let cells = Self::cell_rect(world_rect, area);
        if !cells.is_empty() {
            buf.set_style(cells, Style::default().bg(color));
        }
    }
}

impl Widget for WorldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(game::SKY_COLOR));

        for pair in self.world.pipes() {
            Self::fill(&pair.lower, game::PIPE_COLOR, area, buf);
            Self::fill(&pair.upper, game::PIPE_COLOR, area, buf);
        }
        Self::fill(&self.world.bird().rect(), game::BIRD_COLOR, area, buf);
    }
}
