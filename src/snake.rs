use std::collections::VecDeque;

use crate::geometry::{Cell, Grid};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

pub struct Snake {
    grid: Grid,
    body: VecDeque<Cell>, // head first
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    growth_credit: usize,
}

impl Snake {
    pub fn new(grid: Grid) -> Self {
        let mut snake = Snake {
            grid,
            body: VecDeque::new(),
            direction: Right,
            pending_direction: None,
            target_length: 1,
            growth_credit: 0,
        };
        snake.reset();
        snake
    }

    /// Builds a snake from explicit segments, head first. Used to set up arbitrary positions.
    pub fn from_segments(grid: Grid, segments: &[Cell], direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs a head");
        Snake {
            grid,
            body: segments.iter().map(|&cell| grid.wrap(cell)).collect(),
            direction,
            pending_direction: None,
            target_length: segments.len(),
            growth_credit: 0,
        }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn growth_credit(&self) -> usize {
        self.growth_credit
    }

    /// Last write wins; legality is checked in `resolve_direction`.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    pub fn resolve_direction(&mut self) {
        if let Some(next) = self.pending_direction.take() {
            if next != self.direction.opposite() {
                self.direction = next;
            }
        }
    }

    pub fn advance(&mut self) {
        let (x, y) = self.head();
        let (dx, dy) = self.direction.delta();
        let new_head = self.grid.wrap((x + dx, y + dy));

        self.body.push_front(new_head);

        if self.growth_credit > 0 {
            self.growth_credit -= 1;
        } else {
            self.body.pop_back();
        }
    }

    /// The next `advance` keeps the tail where it is.
    pub fn grow(&mut self) {
        self.target_length += 1;
        self.growth_credit += 1;
    }

    pub fn collided_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.grid.center());
        self.direction = Right;
        self.pending_direction = None;
        self.target_length = 1;
        self.growth_credit = 0;
    }
}
