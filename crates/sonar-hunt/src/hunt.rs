//! The treasure hunt session: a sea map, a sonar budget and the game state.

use std::fmt;
use std::path::Path;

use sonar_core::{Direction, Point};
use sonar_paths::Grid;

use crate::command::Command;
use crate::config::HuntConfig;
use crate::error::HuntError;

/// Progress of a hunt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HuntState {
    #[default]
    Started,
    Won,
    Over,
}

impl HuntState {
    /// Whether the hunt still accepts commands.
    pub fn is_running(self) -> bool {
        self == Self::Started
    }
}

impl fmt::Display for HuntState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Started => "STARTED",
            Self::Won => "WON",
            Self::Over => "OVER",
        })
    }
}

/// What happened in response to one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The boat sailed to the given position.
    Moved(Point),
    /// The move would leave the map or hit an island.
    Blocked,
    /// A sonar was dropped.
    SonarPing { detected: bool, remaining: u32 },
    /// The sonar budget is exhausted.
    NoSonarsLeft,
    /// Map with the shortest route from the boat to the treasure.
    Plot(String),
    /// PLOT before any sonar detected the treasure.
    PlotUnavailable,
    Quit,
    /// The line was not a command.
    Ignored,
    /// The hunt already ended.
    Finished,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved(p) => write!(f, "sailed to {p}"),
            Self::Blocked => f.write_str("cannot sail there"),
            Self::SonarPing {
                detected: true,
                remaining,
            } => write!(f, "sonar: treasure detected ({remaining} left)"),
            Self::SonarPing {
                detected: false,
                remaining,
            } => write!(f, "sonar: nothing ({remaining} left)"),
            Self::NoSonarsLeft => f.write_str("no sonars left"),
            Self::Plot(map) => f.write_str(map),
            Self::PlotUnavailable => f.write_str("treasure not detected yet"),
            Self::Quit => f.write_str("gave up"),
            Self::Ignored => f.write_str("unknown command"),
            Self::Finished => f.write_str("the hunt is over"),
        }
    }
}

/// Result of processing one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub state: HuntState,
    pub event: Event,
}

/// A single hunt over one sea map.
#[derive(Debug)]
pub struct TreasureHunt {
    grid: Grid,
    config: HuntConfig,
    state: HuntState,
    sonars_left: u32,
    treasure_detected: bool,
}

impl TreasureHunt {
    pub fn new(grid: Grid, config: HuntConfig) -> Self {
        log::info!(
            "hunt started on a {}x{} sea with {} sonars (range {})",
            grid.width(),
            grid.height(),
            config.sonars,
            config.sonar_range
        );
        Self {
            grid,
            config,
            state: HuntState::Started,
            sonars_left: config.sonars,
            treasure_detected: false,
        }
    }

    /// Read a map file and start a hunt on it.
    pub fn load(path: impl AsRef<Path>, config: HuntConfig) -> Result<Self, HuntError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| HuntError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid: Grid = text.parse()?;
        Ok(Self::new(grid, config))
    }

    #[inline]
    pub fn state(&self) -> HuntState {
        self.state
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn sonars_left(&self) -> u32 {
        self.sonars_left
    }

    #[inline]
    pub fn treasure_detected(&self) -> bool {
        self.treasure_detected
    }

    #[inline]
    pub fn config(&self) -> &HuntConfig {
        &self.config
    }

    /// Parse and process one input line. Lines that are not commands are
    /// ignored.
    pub fn process_line(&mut self, line: &str) -> Turn {
        match line.parse::<Command>() {
            Ok(cmd) => self.process(cmd),
            Err(e) => {
                log::warn!("ignoring input: {e}");
                self.turn(Event::Ignored)
            }
        }
    }

    pub fn process(&mut self, cmd: Command) -> Turn {
        if !self.state.is_running() {
            log::debug!("{cmd} after the hunt ended");
            return self.turn(Event::Finished);
        }
        let event = match cmd {
            Command::Go(dir) => self.sail(dir),
            Command::Sonar => self.sonar(),
            Command::Plot => self.plot(),
            Command::Quit => {
                self.set_state(HuntState::Over);
                Event::Quit
            }
        };
        self.turn(event)
    }

    // ------------------------------------------------------------------

    fn sail(&mut self, dir: Direction) -> Event {
        if !self.grid.move_boat(dir) {
            return Event::Blocked;
        }
        if self.grid.boat() == self.grid.treasure() {
            self.set_state(HuntState::Won);
        }
        Event::Moved(self.grid.cell(self.grid.boat()).pos())
    }

    fn sonar(&mut self) -> Event {
        if self.sonars_left == 0 {
            return Event::NoSonarsLeft;
        }
        self.sonars_left -= 1;
        let detected = self.grid.treasure_within(self.config.sonar_range).is_some();
        if detected {
            self.treasure_detected = true;
        }
        log::debug!(
            "sonar at {}: detected={detected}, {} left",
            self.grid.cell(self.grid.boat()).pos(),
            self.sonars_left
        );
        if self.sonars_left == 0 {
            self.set_state(HuntState::Over);
        }
        Event::SonarPing {
            detected,
            remaining: self.sonars_left,
        }
    }

    fn plot(&mut self) -> Event {
        if !self.treasure_detected {
            return Event::PlotUnavailable;
        }
        let (boat, treasure) = (self.grid.boat(), self.grid.treasure());
        Event::Plot(self.grid.plot_path(boat, treasure))
    }

    fn set_state(&mut self, state: HuntState) {
        log::info!("hunt {} -> {state}", self.state);
        self.state = state;
    }

    fn turn(&self, event: Event) -> Turn {
        Turn {
            state: self.state,
            event,
        }
    }
}
