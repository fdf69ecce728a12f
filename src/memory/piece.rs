//! Piece representation
//!
//! A [`Piece`] is an opaque game token: a short display name and a numeric id.
//! Pieces are never shared between containers; every transfer moves the value
//! out of one container and into another.

use crate::game::constants::NAME_MAX;
use std::fmt;

/// A named, identified game piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    name: String,
    id: i32,
}

impl Piece {
    /// Create a piece, truncating the name to [`NAME_MAX`] characters
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        let mut name = name.into();
        let cut = name.char_indices().nth(NAME_MAX).map(|(at, _)| at);
        if let Some(cut) = cut {
            name.truncate(cut);
        }
        Piece { name, id }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_kept() {
        let piece = Piece::new("Piece_A1", 1);
        assert_eq!(piece.name(), "Piece_A1");
        assert_eq!(piece.id(), 1);
        assert_eq!(piece.to_string(), "Piece_A1");
    }

    #[test]
    fn test_long_name_truncated_on_char_boundary() {
        let piece = Piece::new("çççççççççççççççççççççççç", 7);
        assert_eq!(piece.name().chars().count(), NAME_MAX);
    }
}
