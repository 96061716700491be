use crate::constants::game;
use crate::pages::game::rect::Rect;

#[derive(Debug, Clone)]
pub struct Bird {
    x: f32,
    y: f32,
    velocity: f32,
}

impl Bird {
    pub fn new() -> Self {
        let mut bird = Bird { x: 0.0, y: 0.0, velocity: 0.0 };
        bird.recenter();
        bird
    }

    pub fn recenter(&mut self) {
        self.x = game::WORLD_WIDTH / 4.0 - game::BIRD_WIDTH / 2.0;
        self.y = game::WORLD_HEIGHT / 2.0 - game::BIRD_HEIGHT / 2.0;
        self.velocity = 0.0;
    }

    pub fn step(&mut self) {
        self.velocity += game::GRAVITY;
        self.y += self.velocity;
    }

    pub fn flap(&mut self) {
        self.velocity = game::FLAP_VELOCITY;
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, game::BIRD_WIDTH, game::BIRD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_is_centered() {
        let bird = Bird::new();
        let rect = bird.rect();
        assert_eq!(rect.left() + rect.width / 2.0, game::WORLD_WIDTH / 4.0);
        assert_eq!(rect.top() + rect.height / 2.0, game::WORLD_HEIGHT / 2.0);
        assert_eq!(bird.velocity(), 0.0);
    }

    #[test]
    fn test_gravity_integration() {
        let mut bird = Bird::new();
        let y0 = bird.rect().top();

        bird.step();
        assert_eq!(bird.velocity(), 0.5);
        assert_eq!(bird.rect().top(), y0 + 0.5);

        bird.step();
        assert_eq!(bird.velocity(), 1.0);
        assert_eq!(bird.rect().top(), y0 + 0.5 + 1.0);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut bird = Bird::new();
        for _ in 0..30 {
            bird.step();
        }
        assert!(bird.velocity() > 0.0);

        bird.flap();
        assert_eq!(bird.velocity(), -8.0);
    }

    #[test]
    fn test_recenter_resets_motion() {
        let mut bird = Bird::new();
        bird.flap();
        for _ in 0..10 {
            bird.step();
        }

        bird.recenter();
        assert_eq!(bird.velocity(), 0.0);
        assert_eq!(bird.rect().top(), game::WORLD_HEIGHT / 2.0 - game::BIRD_HEIGHT / 2.0);
    }
}
