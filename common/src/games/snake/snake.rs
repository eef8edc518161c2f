use std::collections::{HashSet, VecDeque};

use super::types::{LayoutError, Point};

/// Ordered body, head first, mirrored in a set for constant-time occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        Self {
            body: VecDeque::from([start_pos]),
            body_set: HashSet::from([start_pos]),
        }
    }

    pub fn from_segments(segments: &[Point]) -> Result<Self, LayoutError> {
        if segments.is_empty() {
            return Err(LayoutError::EmptyBody);
        }

        let mut body_set = HashSet::with_capacity(segments.len());
        for segment in segments {
            if !body_set.insert(*segment) {
                return Err(LayoutError::OverlappingSegment(*segment));
            }
        }

        Ok(Self {
            body: segments.iter().copied().collect(),
            body_set,
        })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    /// Drops the tail unless it is the only segment left.
    pub fn pop_tail(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }
}
