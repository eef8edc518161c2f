use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::{debug_log, log};
use super::game_state::GameSnapshot;
use super::session::SnakeSession;
use super::types::{Command, StepEvent};

#[derive(Clone, Debug, PartialEq)]
pub struct DriverUpdate {
    pub sequence: u64,
    pub snapshot: GameSnapshot,
    pub high_score: u32,
    pub game_number: u32,
    pub last_event: StepEvent,
}

impl DriverUpdate {
    fn from_session(sequence: u64, session: &SnakeSession, last_event: StepEvent) -> Self {
        Self {
            sequence,
            snapshot: session.snapshot(),
            high_score: session.high_score(),
            game_number: session.game_number(),
            last_event,
        }
    }
}

/// Runs a session on a frame-rate timer. Every frame polls the session, which only steps once
/// its tick interval has elapsed; commands are applied in the same task, between frames.
pub struct SnakeDriver;

impl SnakeDriver {
    /// Must be called from within a tokio runtime.
    pub fn spawn(session: SnakeSession) -> DriverHandle {
        let frame_interval = session.settings().frame_interval;
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) =
            watch::channel(DriverUpdate::from_session(0, &session, StepEvent::None));
        let (stop_tx, stop_rx) = oneshot::channel();

        let join_handle = tokio::spawn(run_frames(
            session,
            frame_interval,
            command_rx,
            update_tx,
            stop_rx,
        ));

        DriverHandle {
            command_tx,
            update_rx,
            stop_tx: Some(stop_tx),
            join_handle: Some(join_handle),
        }
    }
}

async fn run_frames(
    mut session: SnakeSession,
    frame_interval: Duration,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
    update_tx: watch::Sender<DriverUpdate>,
    mut stop_rx: oneshot::Receiver<()>,
) -> SnakeSession {
    let mut frame_timer = interval(frame_interval);
    frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut sequence = 0u64;

    loop {
        tokio::select! {
            _ = &mut stop_rx => break,
            _ = frame_timer.tick() => {
                if let Some(event) = session.poll(Instant::now()) {
                    sequence += 1;
                    update_tx.send_replace(DriverUpdate::from_session(sequence, &session, event));
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                debug_log!("Command received: {:?}", command);
                session.handle_command(command, Instant::now());
                sequence += 1;
                update_tx.send_replace(DriverUpdate::from_session(sequence, &session, StepEvent::None));
            }
        }
    }

    log!("Driver stopped after {} updates", sequence);
    session
}

pub struct DriverHandle {
    command_tx: mpsc::UnboundedSender<Command>,
    update_rx: watch::Receiver<DriverUpdate>,
    stop_tx: Option<oneshot::Sender<()>>,
    join_handle: Option<JoinHandle<SnakeSession>>,
}

impl DriverHandle {
    /// Returns false once the driver has stopped.
    pub fn send(&self, command: Command) -> bool {
        self.command_tx.send(command).is_ok()
    }

    pub fn subscribe(&self) -> watch::Receiver<DriverUpdate> {
        self.update_rx.clone()
    }

    pub fn latest(&self) -> DriverUpdate {
        self.update_rx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
    }

    /// Stops the driver and hands the session back.
    pub async fn join(mut self) -> Option<SnakeSession> {
        self.stop();
        let handle = self.join_handle.take()?;
        handle.await.ok()
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
