use super::types::Direction;

/// Single-slot buffer for the next heading. Only the latest accepted proposal survives until
/// the next step reads it.
#[derive(Clone, Debug, Default)]
pub struct IntentBuffer {
    pending: Option<Direction>,
}

impl IntentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `direction` would reverse straight into the neck.
    pub fn propose(&mut self, direction: Direction, active: Direction) -> bool {
        if direction.is_opposite(&active) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Consumes the slot and returns the heading for this step.
    pub fn promote(&mut self, active: Direction) -> Direction {
        match self.pending.take() {
            Some(direction) if !direction.is_opposite(&active) => direction,
            _ => active,
        }
    }
}
