//! Grid coordinates and the toroidal wrap used by everything that moves.

/// One grid cell, `(x, y)`.
pub type Cell = (i32, i32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

/// Screen rectangle in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        Grid { width, height }
    }

    pub fn from_window(window_width: u32, window_height: u32, cell_size: u32) -> Self {
        Grid::new((window_width / cell_size) as i32, (window_height / cell_size) as i32)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    pub fn contains(&self, (x, y): Cell) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Brings any cell back onto the field; leaving one edge re-enters at the opposite one.
    pub fn wrap(&self, (x, y): Cell) -> Cell {
        (x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    pub fn cell_rect(&self, (x, y): Cell, cell_size: u32) -> Rect {
        Rect {
            x: x as u32 * cell_size,
            y: y as u32 * cell_size,
            width: cell_size,
            height: cell_size,
        }
    }
}
