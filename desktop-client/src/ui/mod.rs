mod colors;
mod game_ui;
mod input;

pub use game_ui::SnakeApp;
