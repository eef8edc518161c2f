mod clock;
mod driver;
mod game_state;
mod input;
mod intent;
mod session;
mod settings;
mod snake;
mod types;

pub use clock::TickThrottle;
pub use driver::{DriverHandle, DriverUpdate, SnakeDriver};
pub use game_state::{level_for_score, GameSnapshot, SnakeGameState};
pub use input::{command_for_key, InputKey};
pub use intent::IntentBuffer;
pub use session::SnakeSession;
pub use settings::{SnakeSessionSettings, START_DIRECTION};
pub use snake::Snake;
pub use types::{Command, Direction, GameEndReason, GameStatus, LayoutError, Point, StepEvent};
