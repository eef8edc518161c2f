use common::games::snake::{command_for_key, Command, InputKey};
use eframe::egui;

const KEY_BINDINGS: &[(egui::Key, InputKey)] = &[
    (egui::Key::ArrowUp, InputKey::ArrowUp),
    (egui::Key::ArrowDown, InputKey::ArrowDown),
    (egui::Key::ArrowLeft, InputKey::ArrowLeft),
    (egui::Key::ArrowRight, InputKey::ArrowRight),
    (egui::Key::W, InputKey::Char('w')),
    (egui::Key::S, InputKey::Char('s')),
    (egui::Key::A, InputKey::Char('a')),
    (egui::Key::D, InputKey::Char('d')),
    (egui::Key::Space, InputKey::Space),
    (egui::Key::Enter, InputKey::Enter),
];

/// Commands for the keys pressed this frame, in binding order.
pub fn pressed_commands(ctx: &egui::Context) -> Vec<Command> {
    ctx.input(|i| {
        KEY_BINDINGS
            .iter()
            .filter(|(key, _)| i.key_pressed(*key))
            .filter_map(|(_, input_key)| command_for_key(*input_key))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_binding_produces_a_command() {
        for (key, input_key) in KEY_BINDINGS {
            assert!(command_for_key(*input_key).is_some(), "{:?} is unmapped", key);
        }
    }
}
