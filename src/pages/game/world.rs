use std::collections::VecDeque;

use rand::Rng;

use crate::constants::game;
use crate::pages::game::{bird::Bird, pipe::PipePair};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone)]
pub struct World {
    bird: Bird,
    pipes: VecDeque<PipePair>,
    score: u32,
    high_score: u32,
    phase: Phase,
}

impl World {
    pub fn new() -> Self {
        World { bird: Bird::new(), pipes: VecDeque::new(), score: 0, high_score: 0, phase: Phase::Active }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> impl Iterator<Item = &PipePair> {
        self.pipes.iter()
    }

    pub fn flap(&mut self) {
        match self.phase {
            Phase::Active => self.bird.flap(),
            Phase::Inactive => self.restart(),
        }
    }

    pub fn spawn_pipe(&mut self, rng: &mut impl Rng) {
        if self.phase == Phase::Active {
            self.pipes.push_back(PipePair::spawn(rng));
        }
    }

    pub fn step_frame(&mut self) {
        if self.phase != Phase::Active {
            return;
        }

        self.bird.step();

        // Move pipes to the left and remove those that are out of view
        for pair in self.pipes.iter_mut() {
            pair.advance();
        }
        self.pipes.retain(|pair| pair.on_screen());

        if self.collided() {
            self.end_round();
            return;
        }

        let lead = self.bird.rect().left();
        for pair in self.pipes.iter_mut() {
            if !pair.scored && pair.right() <= lead {
                pair.scored = true;
                self.score += 1;
            }
        }
    }

    fn collided(&self) -> bool {
        let rect = self.bird.rect();
        if rect.top() <= 0.0 || rect.bottom() >= game::WORLD_HEIGHT {
            return true;
        }
        self.pipes.iter().any(|pair| rect.intersects(&pair.lower) || rect.intersects(&pair.upper))
    }

    fn end_round(&mut self) {
        self.phase = Phase::Inactive;
        self.high_score = self.high_score.max(self.score);
    }

    fn restart(&mut self) {
        self.pipes.clear();
        self.score = 0;
        self.bird.recenter();
        self.phase = Phase::Active;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pages::game::rect::Rect;

    // pair with its gap clear of the bird's row
    fn pair_at(x: f32) -> PipePair {
        let mut pair = PipePair::new(400.0);
        pair.lower.x = x;
        pair.upper.x = x;
        pair
    }

    #[test]
    fn test_step_integrates_gravity() {
        let mut world = World::new();
        let y0 = world.bird().rect().top();

        world.step_frame();
        assert_eq!(world.bird().velocity(), 0.5);
        assert_eq!(world.bird().rect().top(), y0 + 0.5);
    }

    #[test]
    fn test_flap_overrides_any_velocity() {
        let mut world = World::new();
        for _ in 0..20 {
            world.step_frame();
        }
        assert!(world.bird().velocity() > 0.0);

        world.flap();
        assert_eq!(world.bird().velocity(), -8.0);
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut world = World::new();
        let mut rng = rand::thread_rng();

        world.spawn_pipe(&mut rng);
        world.spawn_pipe(&mut rng);
        assert_eq!(world.pipes().count(), 2);
    }

    #[test]
    fn test_spawn_frozen_while_inactive() {
        let mut world = World::new();
        world.phase = Phase::Inactive;

        world.spawn_pipe(&mut rand::thread_rng());
        assert_eq!(world.pipes().count(), 0);
    }

    #[test]
    fn test_step_frozen_while_inactive() {
        let mut world = World::new();
        world.phase = Phase::Inactive;
        let before = world.bird().rect();

        world.step_frame();
        assert_eq!(world.bird().rect(), before);
    }

    #[test]
    fn test_scoring_on_trailing_edge() {
        let mut world = World::new();
        // right edge at 88, bird's leading edge at 85
        world.pipes.push_back(pair_at(18.0));

        world.step_frame();
        assert_eq!(world.score(), 1);
        assert_eq!(world.phase(), Phase::Active);

        // the marker keeps the pair from counting again
        world.step_frame();
        assert_eq!(world.score(), 1);
    }

    #[test]
    fn test_score_non_decreasing_while_active() {
        let mut world = World::new();
        world.pipes.push_back(pair_at(18.0));

        let mut last = 0;
        for _ in 0..20 {
            world.step_frame();
            if world.phase() != Phase::Active {
                break;
            }
            assert!(world.score() >= last);
            last = world.score();
        }
        assert_eq!(last, 1);
    }

    #[test]
    fn test_offscreen_pairs_are_dropped() {
        let mut world = World::new();
        let mut pair = pair_at(-116.0);
        pair.scored = true;
        world.pipes.push_back(pair);

        // right edge moves from -46 to -50, exactly the removal margin
        world.step_frame();
        assert_eq!(world.pipes().count(), 0);
    }

    #[test]
    fn test_pipe_collision_ends_round() {
        let mut world = World::new();
        // offset 300 puts the lower pipe's top at the bird's row; park the
        // pair right on top of the bird
        let mut pair = PipePair::new(300.0);
        pair.lower.x = 85.0;
        pair.upper.x = 85.0;
        world.pipes.push_back(pair);

        world.step_frame();
        assert_eq!(world.phase(), Phase::Inactive);
    }

    #[test]
    fn test_floor_ends_round() {
        let mut world = World::new();
        while world.phase() == Phase::Active {
            world.step_frame();
        }
        assert!(world.bird().rect().bottom() >= game::WORLD_HEIGHT);
    }

    #[test]
    fn test_ceiling_ends_round() {
        let mut world = World::new();
        for _ in 0..200 {
            world.flap();
            world.step_frame();
            if world.phase() == Phase::Inactive {
                break;
            }
        }
        assert_eq!(world.phase(), Phase::Inactive);
        assert!(world.bird().rect().top() <= 0.0);
    }

    #[test]
    fn test_high_score_tracks_best_round() {
        let mut world = World::new();
        world.pipes.push_back(pair_at(18.0));
        world.step_frame();
        assert_eq!(world.score(), 1);

        world.end_round();
        assert_eq!(world.high_score(), 1);

        // a worse round must not lower it
        world.flap();
        assert_eq!(world.score(), 0);
        world.end_round();
        assert_eq!(world.high_score(), 1);
    }

    #[test]
    fn test_flap_while_inactive_restarts() {
        let mut world = World::new();
        world.pipes.push_back(pair_at(18.0));
        world.step_frame();
        world.end_round();

        world.flap();

        assert_eq!(world.phase(), Phase::Active);
        assert_eq!(world.score(), 0);
        assert_eq!(world.pipes().count(), 0);
        assert_eq!(world.bird().velocity(), 0.0);
        let rect = world.bird().rect();
        assert_eq!(
            Rect::new(85.0, 285.0, game::BIRD_WIDTH, game::BIRD_HEIGHT),
            rect,
            "bird must be re-centered at (width/4, height/2)"
        );
    }
}
