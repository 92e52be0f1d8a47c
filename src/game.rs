use std::collections::HashSet;

use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

use crate::clock::Pacer;
use crate::config::Config;
use crate::food::Food;
use crate::geometry::Cell;
use crate::input::InputSource;
use crate::render::{draw_frame, Surface};
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickEvent {
    Moved,
    Ate { food: Cell, respawned_at: Option<Cell> },
    Collided,
}

/// Snake, food and the random source that places the food.
pub struct GameState {
    snake: Snake,
    food: Food,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: &Config, mut rng: StdRng) -> Self {
        let snake = Snake::new(config.grid);
        let food = Food::spawn(config.grid, &mut rng);
        GameState { snake, food, rng }
    }

    /// Starts from a hand-built position.
    pub fn from_parts(snake: Snake, food: Food, rng: StdRng) -> Self {
        GameState { snake, food, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> usize {
        self.snake.target_length() - 1
    }

    /// One logical update: turn, move, then eat or collide.
    pub fn tick(&mut self, direction: Option<Direction>) -> TickEvent {
        if let Some(dir) = direction {
            self.snake.set_pending_direction(dir);
        }

        self.snake.resolve_direction();
        self.snake.advance();

        if self.snake.head() == self.food.position() {
            let food = self.food.position();
            self.snake.grow();

            let occupied: HashSet<Cell> = self.snake.body().iter().copied().collect();
            let respawned_at = self.food.respawn(&occupied, &mut self.rng);
            match respawned_at {
                Some(cell) => debug!(?food, respawned_at = ?cell, score = self.score(), "Food eaten"),
                None => warn!(?food, "No free cell left for food"),
            }

            TickEvent::Ate { food, respawned_at }
        } else if self.snake.collided_with_self() {
            info!(head = ?self.snake.head(), score = self.score(), "Snake ran into itself, resetting");
            // Food stays put even if it now sits under the fresh snake.
            self.snake.reset();
            TickEvent::Collided
        } else {
            TickEvent::Moved
        }
    }
}

pub struct GameLoop<S, I, P> {
    config: Config,
    state: GameState,
    surface: S,
    input: I,
    pacer: P,
    ticks: u64,
}

impl<S: Surface, I: InputSource, P: Pacer> GameLoop<S, I, P> {
    pub fn new(config: Config, state: GameState, surface: S, input: I, pacer: P) -> Self {
        GameLoop { config, state, surface, input, pacer, ticks: 0 }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Runs ticks until the player quits.
    pub fn run(&mut self) -> Result<()> {
        info!(
            grid_width = self.config.grid.width,
            grid_height = self.config.grid.height,
            tick_rate_hz = self.config.tick_rate_hz,
            "Game started"
        );

        draw_frame(&mut self.surface, self.state.snake(), self.state.food(), &self.config)?;

        loop {
            let frame = self.input.drain()?;
            if frame.quit {
                info!(ticks = self.ticks, score = self.state.score(), "Quit requested");
                return Ok(());
            }

            let event = self.state.tick(frame.direction);
            self.ticks += 1;
            trace!(tick = self.ticks, ?event, head = ?self.state.snake().head(), "Tick");

            draw_frame(&mut self.surface, self.state.snake(), self.state.food(), &self.config)?;
            self.pacer.tick();
        }
    }
}
