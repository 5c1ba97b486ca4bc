//! Cell classification for the terrain grid.

use serde::{Deserialize, Serialize};

/// What the robot team currently knows about a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellClass {
    /// Never observed
    #[default]
    Unknown = 0,

    /// Observed and traversable; carries a traversal weight
    Free = 1,

    /// Observed and not traversable
    Obstacle = 2,
}

impl CellClass {
    /// Can the robot traverse this cell?
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellClass::Free)
    }

    /// Has this cell been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellClass::Unknown
    }

    /// Convert from the raw storage byte. Unrecognised values read as Unknown.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellClass::Free,
            2 => CellClass::Obstacle,
            _ => CellClass::Unknown,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellClass::Unknown => '?',
            CellClass::Free => '.',
            CellClass::Obstacle => '#',
        }
    }
}
