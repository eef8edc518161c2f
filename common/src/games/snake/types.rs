#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_within(&self, grid_size: usize) -> bool {
        self.x < grid_size && self.y < grid_size
    }

    /// Moves one cell in `direction`, reappearing on the opposite edge when leaving the grid.
    pub fn wrapped_step(&self, direction: Direction, grid_size: usize) -> Point {
        let (dx, dy) = direction.delta();
        let size = grid_size as i64;
        Point::new(
            (self.x as i64 + dx as i64).rem_euclid(size) as usize,
            (self.y as i64 + dy as i64).rem_euclid(size) as usize,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector in screen coordinates, y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    SelfCollision,
    GridFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    None,
    Consumed,
    Collided,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    TogglePause,
    Restart,
    /// Restarts only a finished game.
    RestartIfOver,
    /// Restarts a finished game, toggles pause otherwise.
    PauseOrRestart,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LayoutError {
    EmptyBody,
    OutOfGrid(Point),
    OverlappingSegment(Point),
    TargetOnBody(Point),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::EmptyBody => write!(f, "Snake body must have at least one segment"),
            LayoutError::OutOfGrid(p) => write!(f, "Cell ({}, {}) is outside the grid", p.x, p.y),
            LayoutError::OverlappingSegment(p) => {
                write!(f, "Snake body occupies ({}, {}) more than once", p.x, p.y)
            }
            LayoutError::TargetOnBody(p) => {
                write!(f, "Target at ({}, {}) overlaps the snake", p.x, p.y)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_step_leaves_right_edge() {
        let p = Point::new(19, 4).wrapped_step(Direction::Right, 20);
        assert_eq!(p, Point::new(0, 4));
    }

    #[test]
    fn test_wrapped_step_leaves_top_edge() {
        let p = Point::new(3, 0).wrapped_step(Direction::Up, 20);
        assert_eq!(p, Point::new(3, 19));
    }

    #[test]
    fn test_wrapped_step_inside_grid() {
        assert_eq!(Point::new(5, 5).wrapped_step(Direction::Left, 20), Point::new(4, 5));
        assert_eq!(Point::new(5, 5).wrapped_step(Direction::Down, 20), Point::new(5, 6));
    }

    #[test]
    fn test_opposites() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Down.is_opposite(&Direction::Up));
        assert!(!Direction::Left.is_opposite(&Direction::Up));
        assert!(!Direction::Left.is_opposite(&Direction::Left));
    }
}
