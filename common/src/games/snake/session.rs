use std::time::Instant;

use crate::games::SessionRng;
use crate::log;
use super::clock::TickThrottle;
use super::game_state::{GameSnapshot, SnakeGameState};
use super::settings::SnakeSessionSettings;
use super::types::{Command, Direction, GameStatus, StepEvent};

/// One player's run of games: the current game, its clock and the best score so far.
pub struct SnakeSession {
    settings: SnakeSessionSettings,
    game_state: SnakeGameState,
    throttle: TickThrottle,
    rng: SessionRng,
    high_score: u32,
    game_number: u32,
}

impl SnakeSession {
    pub fn new(settings: SnakeSessionSettings, now: Instant) -> Self {
        let mut rng = SessionRng::from_optional_seed(settings.seed);
        log!("Starting session with seed {}", rng.seed());
        let game_state = SnakeGameState::new(&settings, &mut rng);
        Self::assemble(settings, game_state, rng, now)
    }

    /// Starts from a prepared game state instead of a fresh one.
    pub fn from_state(
        settings: SnakeSessionSettings,
        game_state: SnakeGameState,
        now: Instant,
    ) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        Self::assemble(settings, game_state, rng, now)
    }

    fn assemble(
        settings: SnakeSessionSettings,
        game_state: SnakeGameState,
        rng: SessionRng,
        now: Instant,
    ) -> Self {
        Self {
            throttle: TickThrottle::new(settings.tick_interval, now),
            settings,
            game_state,
            rng,
            high_score: 0,
            game_number: 1,
        }
    }

    pub fn settings(&self) -> &SnakeSessionSettings {
        &self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Starts at 1 and goes up with every reset.
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game_state.snapshot()
    }

    /// Runs at most one step, and only once the tick interval has passed since the last one.
    pub fn poll(&mut self, now: Instant) -> Option<StepEvent> {
        if self.game_state.status() != GameStatus::Running {
            return None;
        }
        if !self.throttle.poll(now) {
            return None;
        }

        let event = self.game_state.step(&mut self.rng);
        if self.game_state.status() == GameStatus::Over {
            self.finish_game();
        }
        Some(event)
    }

    pub fn propose_direction(&mut self, direction: Direction) -> bool {
        self.game_state.propose_direction(direction)
    }

    pub fn toggle_pause(&mut self) -> GameStatus {
        let status = self.game_state.toggle_pause();
        match status {
            GameStatus::Paused => log!("Game paused"),
            GameStatus::Running => log!("Game resumed"),
            GameStatus::Over => {}
        }
        status
    }

    pub fn reset(&mut self, now: Instant) {
        self.game_state = SnakeGameState::new(&self.settings, &mut self.rng);
        self.throttle.reset(now);
        self.game_number += 1;
        log!("Game restarted. High score: {}", self.high_score);
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Move(direction) => {
                self.propose_direction(direction);
            }
            Command::TogglePause => {
                self.toggle_pause();
            }
            Command::Restart => self.reset(now),
            Command::RestartIfOver => {
                if self.status() == GameStatus::Over {
                    self.reset(now);
                }
            }
            Command::PauseOrRestart => {
                if self.status() == GameStatus::Over {
                    self.reset(now);
                } else {
                    self.toggle_pause();
                }
            }
        }
    }

    fn finish_game(&mut self) {
        let score = self.game_state.score();
        if score > self.high_score {
            log!("New high score: {}", score);
            self.high_score = score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::games::snake::input::{command_for_key, InputKey};
    use crate::games::snake::types::{GameEndReason, Point};

    const TICK: Duration = Duration::from_millis(120);

    fn settings() -> SnakeSessionSettings {
        SnakeSessionSettings {
            seed: Some(7),
            ..SnakeSessionSettings::default()
        }
    }

    fn session_with_layout(
        body: &[(usize, usize)],
        direction: Direction,
        target: (usize, usize),
        now: Instant,
    ) -> SnakeSession {
        let body: Vec<Point> = body.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let state = SnakeGameState::from_layout(
            &settings(),
            &body,
            direction,
            Point::new(target.0, target.1),
        )
        .unwrap();
        SnakeSession::from_state(settings(), state, now)
    }

    /// Eats the target on the first tick, then turns back into its own body.
    fn score_then_crash(session: &mut SnakeSession, start: Instant) -> Instant {
        let mut now = start + TICK;
        assert_eq!(session.poll(now), Some(StepEvent::Consumed));

        let head = session.snapshot().body[0];
        let target = session.snapshot().target;
        let (turn, back) = if target.is_some_and(|t| t.y == head.y + 1) {
            (Direction::Up, Direction::Down)
        } else {
            (Direction::Down, Direction::Up)
        };

        session.propose_direction(turn);
        now += TICK;
        session.poll(now);
        session.propose_direction(Direction::Left);
        now += TICK;
        session.poll(now);
        session.propose_direction(back);
        now += TICK;
        assert_eq!(session.poll(now), Some(StepEvent::Collided));
        now
    }

    #[test]
    fn test_poll_is_throttled() {
        let start = Instant::now();
        let mut session = session_with_layout(&[(10, 10)], Direction::Right, (0, 0), start);

        assert_eq!(session.poll(start + Duration::from_millis(16)), None);
        assert_eq!(session.poll(start + Duration::from_millis(100)), None);
        assert_eq!(session.poll(start + TICK), Some(StepEvent::None));
        assert_eq!(session.poll(start + TICK + Duration::from_millis(16)), None);
        assert_eq!(session.snapshot().body, vec![Point::new(11, 10)]);
    }

    #[test]
    fn test_collision_records_high_score() {
        let start = Instant::now();
        let mut session = session_with_layout(
            &[(10, 10), (9, 10), (8, 10), (7, 10)],
            Direction::Right,
            (11, 10),
            start,
        );

        let now = score_then_crash(&mut session, start);

        assert_eq!(session.status(), GameStatus::Over);
        assert!(session.high_score() >= 10);
        assert_eq!(session.high_score(), session.snapshot().score);
        assert_eq!(session.poll(now + TICK * 10), None);
    }

    #[test]
    fn test_high_score_keeps_maximum_across_resets() {
        let start = Instant::now();
        let mut session = session_with_layout(
            &[(10, 10), (9, 10), (8, 10), (7, 10)],
            Direction::Right,
            (11, 10),
            start,
        );
        let now = score_then_crash(&mut session, start);
        let best = session.high_score();

        session.reset(now);
        assert_eq!(session.high_score(), best);
        assert_eq!(session.snapshot().score, 0);

        session.game_state = SnakeGameState::from_layout(
            &settings(),
            &[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Left,
            Point::new(0, 0),
        )
        .unwrap();
        assert_eq!(session.poll(now + TICK), Some(StepEvent::Collided));
        assert_eq!(session.high_score(), best);
    }

    #[test]
    fn test_reset_starts_fresh_and_waits_a_full_tick() {
        let start = Instant::now();
        let mut session = session_with_layout(&[(5, 5), (4, 5), (3, 5)], Direction::Left, (0, 0), start);
        session.poll(start + TICK);
        assert_eq!(session.status(), GameStatus::Over);

        let restart_at = start + Duration::from_secs(3);
        session.handle_command(Command::Restart, restart_at);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.body, vec![Point::new(10, 10)]);
        assert_eq!(snapshot.direction, Direction::Right);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.level, 0);
        assert_eq!(session.poll(restart_at + Duration::from_millis(10)), None);
        assert!(session.poll(restart_at + TICK).is_some());
    }

    #[test]
    fn test_pause_blocks_steps_until_resumed() {
        let start = Instant::now();
        let mut session = session_with_layout(&[(10, 10)], Direction::Right, (0, 0), start);

        session.handle_command(Command::TogglePause, start);
        assert_eq!(session.status(), GameStatus::Paused);
        assert_eq!(session.poll(start + TICK * 5), None);

        session.handle_command(Command::PauseOrRestart, start + TICK * 5);
        assert_eq!(session.status(), GameStatus::Running);
        assert!(session.poll(start + TICK * 6).is_some());
    }

    #[test]
    fn test_game_over_ignores_everything_but_restart() {
        let start = Instant::now();
        let mut session = session_with_layout(&[(5, 5), (4, 5), (3, 5)], Direction::Left, (0, 0), start);
        session.poll(start + TICK);
        let finished = session.snapshot();

        session.handle_command(Command::Move(Direction::Up), start + TICK);
        session.handle_command(Command::TogglePause, start + TICK);
        assert_eq!(session.status(), GameStatus::Over);
        assert_eq!(session.snapshot(), finished);

        session.handle_command(Command::PauseOrRestart, start + TICK * 2);
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_enter_only_restarts_a_finished_game() {
        let start = Instant::now();
        let mut session = session_with_layout(&[(10, 10)], Direction::Right, (11, 10), start);
        let enter = command_for_key(InputKey::Enter).unwrap();

        assert_eq!(session.poll(start + TICK), Some(StepEvent::Consumed));
        let running = session.snapshot();
        assert_eq!(running.score, 10);

        session.handle_command(enter, start + TICK);
        assert_eq!(session.snapshot(), running);
        assert_eq!(session.game_number(), 1);

        session.toggle_pause();
        let paused = session.snapshot();
        session.handle_command(enter, start + TICK);
        assert_eq!(session.snapshot(), paused);
        assert_eq!(session.status(), GameStatus::Paused);

        session.game_state = SnakeGameState::from_layout(
            &settings(),
            &[Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Left,
            Point::new(0, 0),
        )
        .unwrap();
        assert_eq!(session.poll(start + TICK * 2), Some(StepEvent::Collided));

        session.handle_command(enter, start + TICK * 3);
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.snapshot().score, 0);
        assert_eq!(session.game_number(), 2);
    }

    #[test]
    fn test_filling_the_grid_records_high_score() {
        let start = Instant::now();
        let settings = SnakeSessionSettings {
            grid_size: 2,
            ..settings()
        };
        let body = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];
        let state =
            SnakeGameState::from_layout(&settings, &body, Direction::Right, Point::new(1, 0))
                .unwrap();
        let mut session = SnakeSession::from_state(settings, state, start);

        assert_eq!(session.poll(start + TICK), Some(StepEvent::Consumed));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::Over);
        assert_eq!(snapshot.end_reason, Some(GameEndReason::GridFilled));
        assert_eq!(snapshot.target, None);
        assert_eq!(session.high_score(), 10);
        assert_eq!(session.high_score(), snapshot.score);
    }

    #[test]
    fn test_direction_proposed_while_paused_applies_after_resume() {
        let start = Instant::now();
        let mut session = session_with_layout(&[(10, 10)], Direction::Right, (0, 0), start);
        session.toggle_pause();
        session.handle_command(Command::Move(Direction::Down), start);
        session.toggle_pause();
        session.poll(start + TICK);
        assert_eq!(session.snapshot().body, vec![Point::new(10, 11)]);
    }

    #[test]
    fn test_same_seed_places_same_targets() {
        let start = Instant::now();
        let a = SnakeSession::new(settings(), start);
        let b = SnakeSession::new(settings(), start);
        assert_eq!(a.snapshot().target, b.snapshot().target);
    }
}
