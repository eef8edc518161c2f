use common::games::snake::{
    Command, Direction, DriverHandle, DriverUpdate, GameEndReason, GameSnapshot, GameStatus,
    StepEvent,
};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::colors;
use super::input::pressed_commands;

pub struct SnakeApp {
    driver: DriverHandle,
    cell_size: f32,
    event_log: AllocRingBuffer<String>,
    last_sequence: u64,
    last_status: GameStatus,
    last_game_number: u32,
}

/// Event log line for a change of game or status, if it deserves one.
fn transition_message(
    last_game_number: u32,
    last_status: GameStatus,
    update: &DriverUpdate,
) -> Option<&'static str> {
    let snapshot = &update.snapshot;
    if update.game_number != last_game_number {
        return Some("New game");
    }
    match (last_status, snapshot.status) {
        (from, to) if from == to => None,
        (_, GameStatus::Paused) => Some("Paused"),
        (GameStatus::Paused, GameStatus::Running) => Some("Resumed"),
        (_, GameStatus::Over) if snapshot.end_reason == Some(GameEndReason::GridFilled) => {
            Some("Grid filled, you win!")
        }
        _ => None,
    }
}

impl SnakeApp {
    pub fn new(driver: DriverHandle, cell_size: f32, event_log_size: usize) -> Self {
        let latest = driver.latest();
        Self {
            driver,
            cell_size,
            event_log: AllocRingBuffer::new(event_log_size),
            last_sequence: 0,
            last_status: latest.snapshot.status,
            last_game_number: latest.game_number,
        }
    }

    fn send(&mut self, command: Command) {
        if !self.driver.send(command) {
            self.push_event("Game driver is not running".to_string());
        }
    }

    fn push_event(&mut self, message: String) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        self.event_log.enqueue(format!("[{}] {}", timestamp, message));
    }

    fn record_update(&mut self, update: &DriverUpdate) {
        if update.sequence == self.last_sequence {
            return;
        }
        self.last_sequence = update.sequence;
        let snapshot = &update.snapshot;

        match update.last_event {
            StepEvent::Consumed => self.push_event(format!(
                "Food eaten, score {} (level {})",
                snapshot.score, snapshot.level
            )),
            StepEvent::Collided => self.push_event(format!("Crashed with {} points", snapshot.score)),
            StepEvent::None => {}
        }

        if let Some(message) = transition_message(self.last_game_number, self.last_status, update) {
            self.push_event(message.to_string());
        }
        self.last_game_number = update.game_number;
        self.last_status = snapshot.status;
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let board_size = snapshot.grid_size as f32 * self.cell_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(board_size, board_size), egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, colors::BACKGROUND);
        for i in 1..snapshot.grid_size {
            let offset = i as f32 * self.cell_size;
            let stroke = egui::Stroke::new(1.0, colors::GRID_LINE);
            painter.line_segment(
                [rect.min + egui::vec2(offset, 0.0), rect.min + egui::vec2(offset, board_size)],
                stroke,
            );
            painter.line_segment(
                [rect.min + egui::vec2(0.0, offset), rect.min + egui::vec2(board_size, offset)],
                stroke,
            );
        }

        if let Some(target) = snapshot.target {
            let center = self.cell_rect(rect.min, target.x, target.y).center();
            painter.circle_filled(center, self.cell_size * 0.35, colors::FOOD);
        }

        let length = snapshot.body.len();
        for (index, segment) in snapshot.body.iter().enumerate().rev() {
            let color = if index == 0 {
                colors::SNAKE_HEAD
            } else {
                colors::segment_color(index, length)
            };
            let cell = self.cell_rect(rect.min, segment.x, segment.y).shrink(1.5);
            painter.rect_filled(cell, 3.0, color);
        }

        match snapshot.status {
            GameStatus::Over => {
                let title = match snapshot.end_reason {
                    Some(GameEndReason::GridFilled) => "YOU WIN",
                    _ => "GAME OVER",
                };
                self.render_overlay(
                    &painter,
                    rect,
                    title,
                    &format!("Final score: {}  ·  Enter or Space to restart", snapshot.score),
                );
            }
            GameStatus::Paused => {
                self.render_overlay(&painter, rect, "PAUSED", "Space to resume");
            }
            GameStatus::Running => {}
        }
    }

    fn render_overlay(&self, painter: &egui::Painter, rect: egui::Rect, title: &str, hint: &str) {
        painter.rect_filled(rect, 4.0, colors::OVERLAY);
        painter.text(
            rect.center() - egui::vec2(0.0, 20.0),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(36.0),
            colors::FOOD,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, 20.0),
            egui::Align2::CENTER_CENTER,
            hint,
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );
    }

    fn render_side_panel(&mut self, ui: &mut egui::Ui, update: &DriverUpdate) {
        let snapshot = &update.snapshot;

        ui.label(
            egui::RichText::new(format!("SCORE: {:03}", snapshot.score))
                .color(colors::SCORE)
                .size(22.0),
        );
        ui.label(
            egui::RichText::new(format!("HIGH: {:03}", update.high_score))
                .color(colors::HIGH_SCORE)
                .size(22.0),
        );
        ui.label(egui::RichText::new(format!("LEVEL: {}", snapshot.level)).size(18.0));
        ui.label(format!("Length: {}", snapshot.body.len()));
        ui.separator();

        let game_over = snapshot.status == GameStatus::Over;
        ui.vertical_centered(|ui| {
            if ui.add_enabled(!game_over, egui::Button::new("▲")).clicked() {
                self.send(Command::Move(Direction::Up));
            }
            ui.horizontal(|ui| {
                if ui.add_enabled(!game_over, egui::Button::new("◀")).clicked() {
                    self.send(Command::Move(Direction::Left));
                }
                if ui.add_enabled(!game_over, egui::Button::new("▶")).clicked() {
                    self.send(Command::Move(Direction::Right));
                }
            });
            if ui.add_enabled(!game_over, egui::Button::new("▼")).clicked() {
                self.send(Command::Move(Direction::Down));
            }
        });

        ui.add_space(8.0);
        let action_label = match snapshot.status {
            GameStatus::Over => "Restart",
            GameStatus::Paused => "Resume",
            GameStatus::Running => "Pause",
        };
        if ui.button(action_label).clicked() {
            self.send(Command::PauseOrRestart);
        }

        ui.separator();
        ui.label("Arrow keys / WASD or buttons · SPACE to pause/restart · ENTER to restart after game over");
        ui.separator();
        ui.heading("Events");
        egui::ScrollArea::vertical()
            .id_salt("event_log_scroll")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if self.event_log.is_empty() {
                    ui.label(
                        egui::RichText::new("Nothing yet...")
                            .italics()
                            .color(egui::Color32::GRAY),
                    );
                }
                for entry in self.event_log.iter() {
                    ui.label(entry.as_str());
                }
            });
    }

    fn cell_rect(&self, origin: egui::Pos2, x: usize, y: usize) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(x as f32 * self.cell_size, y as f32 * self.cell_size),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in pressed_commands(ctx) {
            self.send(command);
        }

        let update = self.driver.latest();
        self.record_update(&update);

        egui::SidePanel::right("snake_side_panel")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                self.render_side_panel(ui, &update);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("NEON SNAKE");
                ui.add_space(8.0);
                self.render_board(ui, &update.snapshot);
            });
        });

        ctx.request_repaint();
    }
}
