// SPDX-License-Identifier: MPL-2.0
//! Swipe directions and direction sets.

use std::fmt;
use std::str::FromStr;

/// Screen axis a direction moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (left/right).
    X,
    /// Vertical (up/down).
    Y,
}

/// One of the four directions a toast can enter from or be swiped towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    Right,
    Up,
    /// Towards the bottom of the screen.
    #[default]
    Down,
}

impl Direction {
    /// All directions, in exit-priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the axis this direction moves along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }

    /// Returns `-1.0` for left/up and `1.0` for right/down, matching screen
    /// coordinates where y grows downwards.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left | Direction::Up => -1.0,
            Direction::Right | Direction::Down => 1.0,
        }
    }

    /// Returns the lowercase name used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Left => 0b0001,
            Direction::Right => 0b0010,
            Direction::Up => 0b0100,
            Direction::Down => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known direction name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction '{}' (expected left, right, up or down)",
            self.0
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            // "bottom" is accepted for compatibility with older settings files.
            "down" | "bottom" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// A set of directions, e.g. the directions a toast may not be swiped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a copy of the set with `direction` added.
    #[must_use]
    pub fn with(mut self, direction: Direction) -> Self {
        self.insert(direction);
        self
    }

    /// Adds a direction to the set.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Adds `direction` if absent, removes it otherwise.
    pub fn toggle(&mut self, direction: Direction) {
        self.0 ^= direction.bit();
    }

    /// Returns whether the set contains `direction`.
    #[must_use]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained directions in priority order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DirectionSet::empty(), DirectionSet::with)
    }
}

impl<const N: usize> From<[Direction; N]> for DirectionSet {
    fn from(directions: [Direction; N]) -> Self {
        directions.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_directions_use_x_axis() {
        assert_eq!(Direction::Left.axis(), Axis::X);
        assert_eq!(Direction::Right.axis(), Axis::X);
        assert_eq!(Direction::Up.axis(), Axis::Y);
        assert_eq!(Direction::Down.axis(), Axis::Y);
    }

    #[test]
    fn signs_follow_screen_coordinates() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Up.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
        assert_eq!(Direction::Down.sign(), 1.0);
    }

    #[test]
    fn parse_accepts_bottom_alias_and_mixed_case() {
        assert_eq!("bottom".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(" Left ".parse::<Direction>(), Ok(Direction::Left));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn set_tracks_membership() {
        let set = DirectionSet::from([Direction::Up, Direction::Left]);
        assert!(set.contains(Direction::Up));
        assert!(set.contains(Direction::Left));
        assert!(!set.contains(Direction::Down));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Direction::Left, Direction::Up]
        );
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = DirectionSet::empty().with(Direction::Right);
        set.toggle(Direction::Right);
        set.toggle(Direction::Down);
        assert!(!set.contains(Direction::Right));
        assert!(set.contains(Direction::Down));
        set.remove(Direction::Down);
        assert!(set.is_empty());
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = DirectionSet::empty();
        assert!(set.is_empty());
        assert!(Direction::ALL.iter().all(|d| !set.contains(*d)));
    }
}
