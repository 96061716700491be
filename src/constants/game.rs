use ratatui::style::Color;

pub const WORLD_WIDTH: f32 = 400.0;
pub const WORLD_HEIGHT: f32 = 600.0;

pub const GRAVITY: f32 = 0.5;
pub const FLAP_VELOCITY: f32 = -8.0;

pub const BIRD_WIDTH: f32 = 30.0;
pub const BIRD_HEIGHT: f32 = 30.0;

pub const PIPE_WIDTH: f32 = 70.0;
pub const PIPE_HEIGHT: f32 = 400.0;
pub const PIPE_GAP: f32 = 150.0;
pub const PIPE_SPEED: f32 = 4.0;
pub const PIPE_OFFSET_MIN: u16 = 200;
pub const PIPE_OFFSET_MAX: u16 = 400;
pub const OFFSCREEN_MARGIN: f32 = -50.0;

pub const SPAWN_INTERVAL_MS: u64 = 1200;
pub const FRAME_RATE: f64 = 60.0;

pub const SKY_COLOR: Color = Color::Rgb(135, 206, 235);
pub const PIPE_COLOR: Color = Color::Rgb(0, 200, 0);
pub const BIRD_COLOR: Color = Color::Yellow;
pub const TEXT_COLOR: Color = Color::White;
