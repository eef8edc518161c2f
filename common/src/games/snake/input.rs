use super::types::{Command, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
    Space,
    Enter,
}

pub fn command_for_key(key: InputKey) -> Option<Command> {
    let command = match key {
        InputKey::ArrowUp => Command::Move(Direction::Up),
        InputKey::ArrowDown => Command::Move(Direction::Down),
        InputKey::ArrowLeft => Command::Move(Direction::Left),
        InputKey::ArrowRight => Command::Move(Direction::Right),
        InputKey::Char(c) => match c.to_ascii_lowercase() {
            'w' => Command::Move(Direction::Up),
            's' => Command::Move(Direction::Down),
            'a' => Command::Move(Direction::Left),
            'd' => Command::Move(Direction::Right),
            _ => return None,
        },
        InputKey::Space => Command::PauseOrRestart,
        InputKey::Enter => Command::RestartIfOver,
    };
    Some(command)
}
