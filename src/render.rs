//! Drawing contract between the game and whatever shows it.

use anyhow::Result;

use crate::config::{Config, Rgb};
use crate::food::Food;
use crate::geometry::Rect;
use crate::snake::Snake;

pub trait Surface {
    fn clear(&mut self, color: Rgb) -> Result<()>;
    fn draw_cell(&mut self, rect: Rect, fill: Rgb, border: Rgb) -> Result<()>;
    /// Makes everything drawn since the last `clear` visible.
    fn present(&mut self) -> Result<()>;
}

pub fn draw_food<S: Surface + ?Sized>(surface: &mut S, food: &Food, config: &Config) -> Result<()> {
    let rect = config.grid.cell_rect(food.position(), config.cell_size);
    surface.draw_cell(rect, config.food_color, config.border_color)
}

pub fn draw_snake<S: Surface + ?Sized>(surface: &mut S, snake: &Snake, config: &Config) -> Result<()> {
    for &segment in snake.body() {
        let rect = config.grid.cell_rect(segment, config.cell_size);
        surface.draw_cell(rect, config.snake_color, config.border_color)?;
    }

    Ok(())
}

pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, snake: &Snake, food: &Food, config: &Config) -> Result<()> {
    surface.clear(config.background_color)?;
    draw_food(surface, food, config)?;
    draw_snake(surface, snake, config)?;
    surface.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Grid;
    use crate::snake::Direction;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Rgb),
        Cell(Rect, Rgb, Rgb),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, color: Rgb) -> Result<()> {
            self.ops.push(Op::Clear(color));
            Ok(())
        }

        fn draw_cell(&mut self, rect: Rect, fill: Rgb, border: Rgb) -> Result<()> {
            self.ops.push(Op::Cell(rect, fill, border));
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }

    fn px(x: u32, y: u32) -> Rect {
        Rect { x, y, width: 20, height: 20 }
    }

    #[test]
    fn frame_is_background_then_food_then_snake() {
        let config = Config::default();
        let grid = Grid::new(40, 30);
        let snake = Snake::from_segments(grid, &[(3, 2), (2, 2)], Direction::Right);
        let food = Food::at(grid, (10, 0));
        let mut recorder = Recorder::default();

        draw_frame(&mut recorder, &snake, &food, &config).unwrap();

        assert_eq!(
            recorder.ops,
            vec![
                Op::Clear(Rgb::BLACK),
                Op::Cell(px(200, 0), Rgb::RED, Rgb::WHITE),
                Op::Cell(px(60, 40), Rgb::GREEN, Rgb::WHITE),
                Op::Cell(px(40, 40), Rgb::GREEN, Rgb::WHITE),
                Op::Present,
            ]
        );
    }
}
