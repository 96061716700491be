use clap::Parser;

use crate::{constants::game, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = game::FRAME_RATE
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "MILLIS",
        help = "Wall-clock interval between pipe spawns, in milliseconds",
        value_parser = clap::value_parser!(u64).range(1..),
        default_value_t = game::SPAWN_INTERVAL_MS
    )]
    pub spawn_interval: u64,
}
