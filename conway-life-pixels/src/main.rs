#![deny(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use life_grid::{Random, Simulation};
use log::info;
use pixels_main_support::{
    AnimateSettings, FrameRate, MAX_FPS, MIN_FPS, Palette, Rgba, animate, parse_hex_color,
};

const BOARD_WIDTH: u32 = 160;
const BOARD_HEIGHT: u32 = 160;
const CELL_PIXEL_WIDTH: u32 = 2;
const LIVE_RATIO: f64 = 0.35;
const FPS: u32 = 15;
const LIVE_COLOR: &str = "#11d319";
const BACKGROUND_COLOR: &str = "#000000";
const TITLE: &str = "Conway's Game of Life";

/// Conway's Game of Life on a fixed board.
///
/// Space starts and pauses, R regenerates the board, C cycles the live
/// color, Escape or Q quits.
#[derive(Debug, Parser)]
#[command(name = "conway-life-pixels")]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH, value_parser = clap::value_parser!(u32).range(1..=4096))]
    width: u32,

    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT, value_parser = clap::value_parser!(u32).range(1..=4096))]
    height: u32,

    /// Screen pixels per cell edge.
    #[arg(long, default_value_t = CELL_PIXEL_WIDTH, value_parser = clap::value_parser!(u32).range(1..=32))]
    cell_pixels: u32,

    /// Fraction of each column seeded alive before shuffling.
    #[arg(long, default_value_t = LIVE_RATIO, value_parser = parse_live_ratio)]
    live_ratio: f64,

    /// Generations per second.
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(MIN_FPS as i64..=MAX_FPS as i64))]
    fps: u32,

    /// Live cell color as #rrggbb.
    #[arg(long, default_value = LIVE_COLOR, value_parser = parse_hex_color)]
    color: Rgba,

    /// Background color as #rrggbb.
    #[arg(long, default_value = BACKGROUND_COLOR, value_parser = parse_hex_color)]
    background: Rgba,

    /// Seed for the first board. Regenerated boards are always random.
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_live_ratio(text: &str) -> Result<f64, String> {
    let ratio: f64 = text
        .parse()
        .map_err(|_| format!("{text:?} is not a number"))?;
    if ratio > 0.0 && ratio < 1.0 {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rand = args.seed.map_or_else(Random::new, Random::from_seed);
    let world = Simulation::new(args.width, args.height, args.live_ratio, rand);
    let settings = AnimateSettings {
        title: TITLE.to_string(),
        cell_pixels: args.cell_pixels,
        frame_rate: FrameRate::new(args.fps),
        palette: Palette::new(args.color, args.background),
    };
    info!(
        "Animating {}x{} board at up to {} generations per second",
        args.width,
        args.height,
        settings.frame_rate.fps()
    );

    animate(settings, world)?;
    Ok(())
}
