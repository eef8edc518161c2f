use crate::games::SessionRng;
use crate::{debug_log, log};
use super::intent::IntentBuffer;
use super::settings::{SnakeSessionSettings, START_DIRECTION};
use super::snake::Snake;
use super::types::{Direction, GameEndReason, GameStatus, LayoutError, Point, StepEvent};

const PLACEMENT_ATTEMPTS: usize = 100;

pub fn level_for_score(score: u32, level_threshold: u32) -> u32 {
    score / level_threshold.max(1)
}

/// Read-only copy of a session handed to renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub grid_size: usize,
    pub body: Vec<Point>,
    pub direction: Direction,
    pub target: Option<Point>,
    pub score: u32,
    pub level: u32,
    pub status: GameStatus,
    pub end_reason: Option<GameEndReason>,
    pub tick: u64,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    direction: Direction,
    intent: IntentBuffer,
    target: Option<Point>,
    score: u32,
    level: u32,
    status: GameStatus,
    end_reason: Option<GameEndReason>,
    tick: u64,
    grid_size: usize,
    score_per_food: u32,
    level_threshold: u32,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let mut state = Self::empty(settings, Snake::new(settings.start_position()), START_DIRECTION);
        state.place_target(rng);
        state
    }

    pub fn from_layout(
        settings: &SnakeSessionSettings,
        body: &[Point],
        direction: Direction,
        target: Point,
    ) -> Result<Self, LayoutError> {
        if let Some(outside) = body
            .iter()
            .chain(std::iter::once(&target))
            .find(|p| !p.is_within(settings.grid_size))
        {
            return Err(LayoutError::OutOfGrid(*outside));
        }

        let snake = Snake::from_segments(body)?;
        if snake.occupies(&target) {
            return Err(LayoutError::TargetOnBody(target));
        }

        let mut state = Self::empty(settings, snake, direction);
        state.target = Some(target);
        Ok(state)
    }

    fn empty(settings: &SnakeSessionSettings, snake: Snake, direction: Direction) -> Self {
        Self {
            snake,
            direction,
            intent: IntentBuffer::new(),
            target: None,
            score: 0,
            level: 0,
            status: GameStatus::Running,
            end_reason: None,
            tick: 0,
            grid_size: settings.grid_size,
            score_per_food: settings.score_per_food,
            level_threshold: settings.level_threshold,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.intent.pending()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Queues a heading for the next step. Ignored once the game is over.
    pub fn propose_direction(&mut self, direction: Direction) -> bool {
        if self.status == GameStatus::Over {
            return false;
        }
        self.intent.propose(direction, self.direction)
    }

    pub fn toggle_pause(&mut self) -> GameStatus {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Over => GameStatus::Over,
        };
        self.status
    }

    /// Advances one tick. Does nothing unless the game is running.
    ///
    /// The new head is tested against the whole body as it was before the move, so running
    /// into the cell the tail is about to leave still counts as a collision.
    pub fn step(&mut self, rng: &mut SessionRng) -> StepEvent {
        if self.status != GameStatus::Running {
            return StepEvent::None;
        }

        self.tick += 1;
        self.direction = self.intent.promote(self.direction);
        let next_head = self.snake.head().wrapped_step(self.direction, self.grid_size);

        if self.snake.occupies(&next_head) {
            log!(
                "Collided with own body at ({}, {}). Final score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.finish(GameEndReason::SelfCollision);
            return StepEvent::Collided;
        }

        self.snake.push_head(next_head);

        if self.target == Some(next_head) {
            self.score += self.score_per_food;
            self.level = level_for_score(self.score, self.level_threshold);
            log!(
                "Ate food at ({}, {}). Score: {}, level: {}",
                next_head.x,
                next_head.y,
                self.score,
                self.level
            );
            self.place_target(rng);
            return StepEvent::Consumed;
        }

        self.snake.pop_tail();
        debug_log!("Tick {}: head at ({}, {})", self.tick, next_head.x, next_head.y);
        StepEvent::None
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.grid_size,
            body: self.snake.segments().copied().collect(),
            direction: self.direction,
            target: self.target,
            score: self.score,
            level: self.level,
            status: self.status,
            end_reason: self.end_reason,
            tick: self.tick,
        }
    }

    fn finish(&mut self, reason: GameEndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        self.intent.clear();
    }

    fn place_target(&mut self, rng: &mut SessionRng) {
        self.target = self.find_free_cell(rng);
        match self.target {
            Some(pos) => debug_log!("Food placed at ({}, {})", pos.x, pos.y),
            None => {
                log!("Grid filled. Final score: {}", self.score);
                self.finish(GameEndReason::GridFilled);
            }
        }
    }

    fn find_free_cell(&self, rng: &mut SessionRng) -> Option<Point> {
        if self.snake.len() >= self.grid_size * self.grid_size {
            return None;
        }

        for _ in 0..PLACEMENT_ATTEMPTS {
            let pos = Point::new(
                rng.random_range(0..self.grid_size),
                rng.random_range(0..self.grid_size),
            );
            if !self.snake.occupies(&pos) {
                return Some(pos);
            }
        }

        let free: Vec<Point> = (0..self.grid_size)
            .flat_map(|y| (0..self.grid_size).map(move |x| Point::new(x, y)))
            .filter(|p| !self.snake.occupies(p))
            .collect();

        if free.is_empty() {
            None
        } else {
            Some(free[rng.random_range(0..free.len())])
        }
    }
}
