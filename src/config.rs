use std::time::Duration;

use crate::geometry::Grid;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const CELL_SIZE: u32 = 20;
const TICK_RATE_HZ: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
}

/// Game settings. Built once at startup and handed to whoever needs them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub grid: Grid,
    pub tick_rate_hz: u32,
    pub background_color: Rgb,
    pub food_color: Rgb,
    pub snake_color: Rgb,
    pub border_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            grid: Grid::from_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE),
            tick_rate_hz: TICK_RATE_HZ,
            background_color: Rgb::BLACK,
            food_color: Rgb::RED,
            snake_color: Rgb::GREEN,
            border_color: Rgb::WHITE,
        }
    }
}

impl Config {
    /// Same settings on a differently sized field, window resized to match.
    pub fn with_grid(grid: Grid) -> Self {
        let base = Config::default();
        Config {
            window_width: grid.width as u32 * base.cell_size,
            window_height: grid.height as u32 * base.cell_size,
            grid,
            ..base
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz
    }
}
