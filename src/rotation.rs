use serde::{Deserialize, Serialize};

use crate::action::PlayerId;

/// Direction of play around the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Tracks whose turn it is and which way play moves.
///
/// Seats are numbered in seating order; the current index is always below the
/// seat count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    count: usize,
    index: PlayerId,
    direction: Direction,
}

impl Rotation {
    /// Starts at seat 0 moving clockwise.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero. `GameSettings::new` rejects such tables
    /// before the engine builds a rotation.
    pub fn new(count: usize) -> Self {
        assert!(count > 0, "rotation needs at least one seat");
        Self {
            count,
            index: 0,
            direction: Direction::Clockwise,
        }
    }

    pub fn current(&self) -> PlayerId {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Seat that would play next, jumping one extra seat when `skip` is set.
    pub fn peek_next(&self, skip: bool) -> PlayerId {
        self.offset(self.index, if skip { 2 } else { 1 })
    }

    pub fn advance(&mut self, skip: bool) {
        self.index = self.peek_next(skip);
    }

    /// Flips the direction. With two seats this changes nothing in turn order,
    /// so callers request a skip instead.
    pub fn reverse(&mut self) {
        self.direction = self.direction.flipped();
    }

    /// Every seat once, starting from the current one and following the direction.
    pub fn seats(&self) -> Seats {
        Seats {
            rotation: self.clone(),
            emitted: 0,
        }
    }

    fn offset(&self, from: PlayerId, steps: isize) -> PlayerId {
        let count = self.count as isize;
        (from as isize + self.direction.step() * steps).rem_euclid(count) as PlayerId
    }
}

/// Iterator returned by [`Rotation::seats`].
#[derive(Clone, Debug)]
pub struct Seats {
    rotation: Rotation,
    emitted: usize,
}

impl Iterator for Seats {
    type Item = PlayerId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.rotation.count {
            return None;
        }
        let seat = self
            .rotation
            .offset(self.rotation.index, self.emitted as isize);
        self.emitted += 1;
        Some(seat)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rotation.count - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Seats {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_plain_advances_wrap_around() {
        let mut rotation = Rotation::new(3);
        rotation.advance(false);
        assert_eq!(rotation.current(), 1);
        rotation.advance(false);
        assert_eq!(rotation.current(), 2);
        rotation.advance(false);
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn skip_jumps_one_seat() {
        let mut rotation = Rotation::new(3);
        assert_eq!(rotation.peek_next(true), 2);
        assert_eq!(rotation.current(), 0);
        rotation.advance(true);
        assert_eq!(rotation.current(), 2);
        rotation.advance(true);
        assert_eq!(rotation.current(), 1);
    }

    #[test]
    fn reverse_walks_backwards() {
        let mut rotation = Rotation::new(4);
        rotation.reverse();
        assert_eq!(rotation.direction(), Direction::CounterClockwise);
        assert_eq!(rotation.peek_next(false), 3);
        rotation.advance(true);
        assert_eq!(rotation.current(), 2);
        rotation.reverse();
        assert_eq!(rotation.peek_next(false), 3);
    }

    #[test]
    fn two_seat_skip_returns_to_current() {
        let mut rotation = Rotation::new(2);
        rotation.advance(true);
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn seats_follow_direction_and_restart() {
        let mut rotation = Rotation::new(4);
        rotation.advance(false);
        assert_eq!(rotation.seats().collect::<Vec<_>>(), vec![1, 2, 3, 0]);
        rotation.reverse();
        let seats = rotation.seats();
        assert_eq!(seats.len(), 4);
        assert_eq!(seats.clone().collect::<Vec<_>>(), vec![1, 0, 3, 2]);
        assert_eq!(seats.collect::<Vec<_>>(), vec![1, 0, 3, 2]);
    }

    #[test]
    #[should_panic(expected = "rotation needs at least one seat")]
    fn empty_table_has_no_rotation() {
        let _ = Rotation::new(0);
    }
}
