use anyhow::Result;

use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// Everything the player asked for since the previous tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub direction: Option<Direction>,
    pub quit: bool,
}

impl InputFrame {
    pub fn from_commands<I: IntoIterator<Item = Command>>(commands: I) -> Self {
        let mut frame = InputFrame::default();

        for command in commands {
            match command {
                Command::Turn(dir) => frame.direction = Some(dir),
                Command::Quit => frame.quit = true,
            }
        }

        frame
    }
}

pub trait InputSource {
    /// Empties the event queue without blocking.
    fn drain(&mut self) -> Result<InputFrame>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    #[test]
    fn last_turn_wins() {
        let frame = InputFrame::from_commands(vec![Command::Turn(Up), Command::Turn(Left)]);
        assert_eq!(frame, InputFrame { direction: Some(Left), quit: false });
    }

    #[test]
    fn quit_sticks_regardless_of_order() {
        let frame = InputFrame::from_commands(vec![Command::Quit, Command::Turn(Down)]);
        assert!(frame.quit);
        assert_eq!(frame.direction, Some(Down));
    }

    #[test]
    fn no_events_is_an_empty_frame() {
        assert_eq!(InputFrame::from_commands(Vec::new()), InputFrame::default());
    }
}
