use std::collections::HashSet;

use rand::Rng;

use crate::geometry::{Cell, Grid};

pub struct Food {
    grid: Grid,
    position: Cell,
}

impl Food {
    /// Places food anywhere on the field. The snake is not consulted at start-up.
    pub fn spawn<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        Food { grid, position: random_cell(grid, rng) }
    }

    pub fn at(grid: Grid, position: Cell) -> Self {
        Food { grid, position: grid.wrap(position) }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a random cell outside `excluded`.
    ///
    /// Returns `None` and leaves the food in place when `excluded` already
    /// covers the whole field.
    pub fn respawn<R: Rng + ?Sized>(&mut self, excluded: &HashSet<Cell>, rng: &mut R) -> Option<Cell> {
        let free = self.grid.area() - excluded.iter().filter(|&&cell| self.grid.contains(cell)).count();
        if free == 0 {
            return None;
        }

        loop {
            let candidate = random_cell(self.grid, rng);
            if !excluded.contains(&candidate) {
                self.position = candidate;
                return Some(candidate);
            }
        }
    }
}

fn random_cell<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Cell {
    (rng.gen_range(0..grid.width), rng.gen_range(0..grid.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn spawn_lands_on_the_field() {
        let grid = Grid::new(40, 30);
        for seed in 0..50 {
            let food = Food::spawn(grid, &mut StdRng::seed_from_u64(seed));
            assert!(grid.contains(food.position()));
        }
    }

    #[test]
    fn respawn_avoids_excluded_cells() {
        let grid = Grid::new(4, 3);
        // Everything but (2, 1) is taken.
        let excluded: HashSet<Cell> = (0..4)
            .flat_map(|x| (0..3).map(move |y| (x, y)))
            .filter(|&cell| cell != (2, 1))
            .collect();

        for seed in 0..20 {
            let mut food = Food::at(grid, (0, 0));
            let placed = food.respawn(&excluded, &mut StdRng::seed_from_u64(seed));
            assert_eq!(placed, Some((2, 1)));
            assert_eq!(food.position(), (2, 1));
        }
    }

    #[test]
    fn respawn_never_hits_a_long_body() {
        let grid = Grid::new(40, 30);
        let body: HashSet<Cell> = (0..40).map(|x| (x, 15)).chain((0..30).map(|y| (20, y))).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::at(grid, (20, 15));

        for _ in 0..500 {
            let placed = food.respawn(&body, &mut rng).unwrap();
            assert!(!body.contains(&placed));
        }
    }

    #[test]
    fn full_field_leaves_food_in_place() {
        let grid = Grid::new(2, 2);
        let excluded: HashSet<Cell> = [(0, 0), (0, 1), (1, 0), (1, 1)].iter().copied().collect();
        let mut food = Food::at(grid, (1, 1));

        assert_eq!(food.respawn(&excluded, &mut StdRng::seed_from_u64(1)), None);
        assert_eq!(food.position(), (1, 1));
    }
}
