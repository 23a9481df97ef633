//! Sonar treasure hunt sessions.
//!
//! A [`TreasureHunt`] owns a sea [`Grid`](sonar_paths::Grid) and a sonar
//! budget. Player input arrives as [`Command`]s (or raw lines) and every
//! command yields a [`Turn`]: the new [`HuntState`] plus the [`Event`] that
//! happened. [`SeaGen`] draws random seas for the hunt.

pub mod command;
pub mod config;
pub mod error;
pub mod hunt;
pub mod mapgen;

pub use command::{Command, ParseCommandError};
pub use config::HuntConfig;
pub use error::HuntError;
pub use hunt::{Event, HuntState, TreasureHunt, Turn};
pub use mapgen::SeaGen;
