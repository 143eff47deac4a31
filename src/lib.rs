//! Flood-fill coloring puzzle on a small square board, with undo history.

pub mod cell;
pub mod command;
pub mod config;
pub mod console;
pub mod flood_fill;
pub mod game_state;
pub mod grid;
pub mod shell;

pub use cell::Cell;
pub use config::GameConfig;
pub use flood_fill::{connected_region, flood_fill};
pub use game_state::{FillOutcome, GridState};
pub use grid::{Coordinate, Grid};
pub use shell::Shell;
