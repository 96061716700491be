use rand::Rng;

use crate::constants::game;
use crate::pages::game::rect::Rect;

#[derive(Debug, Clone)]
pub struct PipePair {
    pub lower: Rect,
    pub upper: Rect,
    pub scored: bool,
}

impl PipePair {
    // offset is the lower pipe's top edge; the upper pipe mirrors above the gap
    pub fn new(offset: f32) -> Self {
        let lower = Rect::new(game::WORLD_WIDTH, offset, game::PIPE_WIDTH, game::PIPE_HEIGHT);
        let upper = Rect::new(
            game::WORLD_WIDTH,
            offset - game::PIPE_GAP - game::PIPE_HEIGHT,
            game::PIPE_WIDTH,
            game::PIPE_HEIGHT,
        );
        PipePair { lower, upper, scored: false }
    }

    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(game::PIPE_OFFSET_MIN..=game::PIPE_OFFSET_MAX) as f32)
    }

    pub fn advance(&mut self) {
        self.lower.x -= game::PIPE_SPEED;
        self.upper.x -= game::PIPE_SPEED;
    }

    pub fn right(&self) -> f32 {
        self.lower.right()
    }

    pub fn on_screen(&self) -> bool {
        self.right() > game::OFFSCREEN_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pair_layout() {
        let pair = PipePair::new(300.0);

        assert_eq!(pair.lower, Rect::new(400.0, 300.0, 70.0, 400.0));
        assert_eq!(pair.upper, Rect::new(400.0, -250.0, 70.0, 400.0));
        assert!(!pair.scored);
    }

    #[test]
    fn test_gap_separates_pair() {
        let pair = PipePair::new(250.0);
        assert_eq!(pair.lower.top() - pair.upper.bottom(), game::PIPE_GAP);
    }

    #[test]
    fn test_advance_keeps_pair_aligned() {
        let mut pair = PipePair::new(300.0);
        for _ in 0..10 {
            pair.advance();
        }
        assert_eq!(pair.lower.x, 360.0);
        assert_eq!(pair.upper.x, pair.lower.x);
        assert_eq!(pair.lower.y, 300.0);
    }

    #[test]
    fn test_offscreen_after_margin() {
        let mut pair = PipePair::new(300.0);
        // right edge starts at 470 and moves 4 per frame; it reaches the
        // -50 margin exactly on frame 130
        for _ in 0..129 {
            pair.advance();
        }
        assert!(pair.on_screen());
        pair.advance();
        assert_eq!(pair.right(), -50.0);
        assert!(!pair.on_screen());
    }

    #[test]
    fn test_spawn_offset_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let pair = PipePair::spawn(&mut rng);
            let offset = pair.lower.top();
            assert!(offset >= game::PIPE_OFFSET_MIN as f32);
            assert!(offset <= game::PIPE_OFFSET_MAX as f32);
            assert_eq!(pair.lower.x, game::WORLD_WIDTH);
        }
    }
}
