//! Grid snake on a wrap-around field, ticking at a fixed rate.

pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod snake;
pub mod term;
