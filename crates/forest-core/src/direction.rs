//! Movement directions

use strum::{Display, EnumIter, EnumString};

/// One of the four choices offered to the player each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction. Row 0 is the top of the grid.
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Capitalised menu label
    pub const fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }

    /// Parse a typed answer: full names or their initials.
    pub fn parse_choice(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(dir) = input.parse() {
            return Some(dir);
        }
        match input.to_ascii_lowercase().as_str() {
            "u" => Some(Direction::Up),
            "d" => Some(Direction::Down),
            "l" => Some(Direction::Left),
            "r" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_full_names() {
        for dir in Direction::iter() {
            assert_eq!(Direction::parse_choice(dir.label()), Some(dir));
            assert_eq!(Direction::parse_choice(&dir.to_string()), Some(dir));
        }
    }

    #[test]
    fn test_parse_shortcuts() {
        assert_eq!(Direction::parse_choice(" u\n"), Some(Direction::Up));
        assert_eq!(Direction::parse_choice("D"), Some(Direction::Down));
        assert_eq!(Direction::parse_choice("l"), Some(Direction::Left));
        assert_eq!(Direction::parse_choice("r"), Some(Direction::Right));
        assert_eq!(Direction::parse_choice("north"), None);
        assert_eq!(Direction::parse_choice(""), None);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in Direction::iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
