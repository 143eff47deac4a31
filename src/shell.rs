use crate::cell::Cell;
use crate::command::{parse_line, Command, CommandError};
use crate::config::{ConfigError, GameConfig};
use crate::flood_fill::connected_region;
use crate::game_state::{FillOutcome, GridState};
use crate::grid::{Coordinate, Grid};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{0}")]
    Command(#[from] CommandError),
    #[error("Cell ({row}, {column}) is outside the {cells_per_axis}x{cells_per_axis} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        cells_per_axis: usize,
    },
    #[error("Color {0} is not in the palette")]
    NotInPalette(Cell),
    #[error("Failed to encode board: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the caller should do after a line was executed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

/// Text front end over [`GridState`]. Every user action goes through one of
/// the `on_*` handlers.
pub struct Shell {
    config: GameConfig,
    state: GridState,
}

impl Shell {
    /// Builds a shell for a board described by `config`, rejecting configs
    /// that fail [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        let state = GridState::new(config.cells_per_axis, config.initial_color);
        Self { config, state }
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn current_grid(&self) -> &Grid {
        self.state.current_grid()
    }

    /// Fills the cell under a pointer position on the configured surface.
    pub fn on_cell_activated(&mut self, x: f64, y: f64) -> (Coordinate, FillOutcome) {
        let seed = Coordinate::from_pointer(
            x,
            y,
            self.config.surface_width,
            self.config.surface_height,
            self.state.cells_per_axis(),
        );
        (seed, self.state.apply_flood_fill(seed))
    }

    pub fn on_undo_requested(&mut self) -> bool {
        self.state.undo()
    }

    pub fn on_restart_requested(&mut self) {
        self.state.restart();
    }

    pub fn on_color_selected(&mut self, color: Cell) -> Result<(), ShellError> {
        if !self.config.palette.contains(&color) {
            return Err(ShellError::NotInPalette(color));
        }
        self.state.select_color(color);
        Ok(())
    }

    /// Runs every command on `line` in order. Stops at the first error; the
    /// commands before it stay applied.
    pub fn execute_line(&mut self, line: &str) -> Result<Reply, ShellError> {
        let commands = parse_line(line).map_err(|err| {
            log::warn!("rejected '{}': {}", line.trim(), err);
            err
        })?;

        let mut output = Vec::new();
        for command in commands {
            if command == Command::Quit {
                return Ok(Reply {
                    output: output.join("\n"),
                    quit: true,
                });
            }
            let text = self.execute_command(command).map_err(|err| {
                log::warn!("command failed: {}", err);
                err
            })?;
            if !text.is_empty() {
                output.push(text);
            }
        }

        Ok(Reply {
            output: output.join("\n"),
            quit: false,
        })
    }

    fn execute_command(&mut self, command: Command) -> Result<String, ShellError> {
        match command {
            Command::Fill { row, column } => {
                let seed = self.checked_coordinate(row, column)?;
                let outcome = self.state.apply_flood_fill(seed);
                Ok(self.describe_fill(seed, outcome))
            }
            Command::Click { x, y } => {
                let (seed, outcome) = self.on_cell_activated(x, y);
                Ok(self.describe_fill(seed, outcome))
            }
            Command::Color(color) => {
                self.on_color_selected(color)?;
                Ok(format!("Color: {}", color))
            }
            Command::Undo => {
                if self.on_undo_requested() {
                    Ok(self.current_grid().to_string())
                } else {
                    Ok("Nothing to undo".to_string())
                }
            }
            Command::Restart => {
                self.on_restart_requested();
                Ok(self.current_grid().to_string())
            }
            Command::Show => Ok(self.current_grid().to_string()),
            Command::History => Ok(format!("Snapshots: {}", self.state.history_len())),
            Command::Region { row, column } => {
                let seed = self.checked_coordinate(row, column)?;
                let region = connected_region(self.current_grid(), seed);
                let cells: Vec<String> = region.iter().map(|c| c.to_string()).collect();
                Ok(format!(
                    "{} {} cells: {}",
                    region.len(),
                    self.current_grid().get(seed),
                    cells.join(" ")
                ))
            }
            Command::Dump => Ok(serde_json::to_string(self.current_grid())?),
            Command::Palette => {
                let names: Vec<String> = self
                    .config
                    .palette
                    .iter()
                    .map(|c| {
                        if *c == self.state.replacement_color() {
                            format!("[{}]", c)
                        } else {
                            c.to_string()
                        }
                    })
                    .collect();
                Ok(names.join(" "))
            }
            Command::Help => Ok(Command::USAGE.join("\n")),
            Command::Quit => Ok(String::new()),
        }
    }

    fn checked_coordinate(&self, row: usize, column: usize) -> Result<Coordinate, ShellError> {
        self.current_grid()
            .coordinate(row, column)
            .ok_or(ShellError::OutOfBounds {
                row,
                column,
                cells_per_axis: self.state.cells_per_axis(),
            })
    }

    fn describe_fill(&self, seed: Coordinate, outcome: FillOutcome) -> String {
        let summary = if outcome.repainted == 0 {
            format!("Fill at {}: nothing to repaint", seed)
        } else {
            format!(
                "Fill at {}: {} -> {}, {} cells",
                seed,
                outcome.target,
                self.state.replacement_color(),
                outcome.repainted
            )
        };
        format!("{}\n{}", summary, self.current_grid())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::from_valid_config(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn click_maps_pointer_to_cell() {
        let mut shell = Shell::default();
        let (seed, outcome) = shell.on_cell_activated(250.0, 10.0);
        assert_eq!(seed, Coordinate { row: 0, column: 2 });
        assert_eq!(outcome.repainted, 9);
    }

    #[test]
    fn fill_out_of_bounds_is_rejected_without_a_snapshot() {
        let mut shell = Shell::default();
        let err = shell.execute_line("fill 3 0").unwrap_err();
        assert!(matches!(err, ShellError::OutOfBounds { row: 3, column: 0, cells_per_axis: 3 }));
        assert_eq!(shell.state().history_len(), 1);
    }

    #[test]
    fn invalid_config_is_rejected_before_building_a_board() {
        let zero = GameConfig {
            cells_per_axis: 0,
            ..GameConfig::default()
        };
        assert!(matches!(Shell::new(zero), Err(ConfigError::Invalid(_))));

        let huge = GameConfig {
            cells_per_axis: usize::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(Shell::new(huge), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn smallest_valid_board_accepts_clicks() {
        let config = GameConfig {
            cells_per_axis: 1,
            ..GameConfig::default()
        };
        let mut shell = Shell::new(config).unwrap();
        let (seed, outcome) = shell.on_cell_activated(1.0, 1.0);
        assert_eq!(seed, Coordinate { row: 0, column: 0 });
        assert_eq!(outcome.repainted, 1);
    }

    #[test]
    fn color_outside_palette_is_rejected() {
        let config = GameConfig {
            palette: vec![Cell::Red, Cell::Blue],
            ..GameConfig::default()
        };
        let mut shell = Shell::new(config).unwrap();
        assert!(matches!(
            shell.execute_line("color green"),
            Err(ShellError::NotInPalette(Cell::Green))
        ));
        assert_eq!(shell.state().replacement_color(), Cell::Blue);
    }

    #[test]
    fn commands_before_an_error_stay_applied() {
        let mut shell = Shell::default();
        assert!(shell.execute_line("fill 0 0; bogus").is_err());
        assert_eq!(shell.state().history_len(), 1);

        assert!(shell.execute_line("fill 0 0; fill 9 9").is_err());
        assert_eq!(shell.state().history_len(), 2);
    }

    #[test]
    fn quit_stops_the_line() {
        let mut shell = Shell::default();
        let reply = shell.execute_line("quit; fill 0 0").unwrap();
        assert!(reply.quit);
        assert_eq!(shell.state().history_len(), 1);
    }

    #[test]
    fn undo_reports_when_nothing_is_left() {
        let mut shell = Shell::default();
        let reply = shell.execute_line("undo").unwrap();
        assert_eq!(reply.output, "Nothing to undo");
    }

    #[test]
    fn show_prints_rows() {
        let mut shell = Shell::default();
        shell.execute_line("color red; fill 0 0").unwrap();
        let reply = shell.execute_line("show").unwrap();
        assert_eq!(reply.output, "red red red\nred red red\nred red red");
    }

    #[test]
    fn help_lists_every_command() {
        let mut shell = Shell::default();
        let output = shell.execute_line("help").unwrap().output;
        for name in [
            "fill", "click", "color", "undo", "restart", "show", "history", "region", "dump",
            "palette", "help", "quit",
        ] {
            assert!(
                output.lines().any(|line| line.starts_with(name)),
                "missing {}",
                name
            );
        }
    }

    #[test]
    fn palette_marks_selected_color() {
        let config = GameConfig {
            palette: vec![Cell::Red, Cell::Blue],
            ..GameConfig::default()
        };
        let mut shell = Shell::new(config).unwrap();
        assert_eq!(shell.execute_line("palette").unwrap().output, "red [blue]");
    }
}
