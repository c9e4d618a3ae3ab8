use super::constants::Direction;

/// A zone coordinate within the galaxy grid.
/// Values range 0..width and 0..height. (0,0) is the south-west corner.
/// X increases eastward, Y increases northward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The neighbouring coordinate one step in `direction`. Not bounds checked.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
