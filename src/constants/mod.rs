pub mod game;

// Bordered playing field, in terminal cells
pub const WIDTH: u16 = 66;
pub const HEIGHT: u16 = 50;
