use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),
}

/// A single grid cell. `Empty` is the unset sentinel, everything else is paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Black,
}

impl Cell {
    /// Every paintable color, in palette order.
    pub const PALETTE: [Cell; 8] = [
        Cell::White,
        Cell::Red,
        Cell::Orange,
        Cell::Yellow,
        Cell::Green,
        Cell::Blue,
        Cell::Purple,
        Cell::Black,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::White => "white",
            Cell::Red => "red",
            Cell::Orange => "orange",
            Cell::Yellow => "yellow",
            Cell::Green => "green",
            Cell::Blue => "blue",
            Cell::Purple => "purple",
            Cell::Black => "black",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cell {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "" | "." | "empty" => Ok(Cell::Empty),
            "white" => Ok(Cell::White),
            "red" => Ok(Cell::Red),
            "orange" => Ok(Cell::Orange),
            "yellow" => Ok(Cell::Yellow),
            "green" => Ok(Cell::Green),
            "blue" => Ok(Cell::Blue),
            "purple" => Ok(Cell::Purple),
            "black" => Ok(Cell::Black),
            _ => Err(ColorError::UnknownColor(s.trim().to_string())),
        }
    }
}
