use std::collections::VecDeque;

use crate::foundation::core::Point;
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Fixed-capacity FIFO of recent tip positions, oldest first.
///
/// Once full, each push evicts the oldest point before appending, so the length never exceeds
/// the capacity. Repeated identical points are stored as-is.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<Point>,
    capacity: usize,
}

impl TrailBuffer {
    /// Create an empty trail holding at most `capacity` points.
    pub fn new(capacity: usize) -> EpicycleResult<Self> {
        if capacity == 0 {
            return Err(EpicycleError::invalid_argument(
                "trail capacity must be > 0",
            ));
        }
        Ok(Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append `p`, evicting the oldest point first when full.
    pub fn push(&mut self, p: Point) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    /// Points from oldest to newest.
    pub fn contents(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    /// Iterate from oldest to newest without allocating.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Most recently pushed point.
    pub fn latest(&self) -> Option<Point> {
        self.points.back().copied()
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` before the first push or after [`TrailBuffer::clear`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of stored points.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every stored point; the capacity is unchanged.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/trail.rs"]
mod tests;
