//! The read-process-print loop of a hunt.

use std::io::{self, BufRead, Write};

use sonar_hunt::{Event, HuntState, TreasureHunt};

use crate::render::write_map;

/// Play `hunt` with one command per input line until it ends or the input
/// runs out. Returns the final state.
pub fn play(
    hunt: &mut TreasureHunt,
    input: impl BufRead,
    out: &mut impl Write,
    colored: bool,
) -> io::Result<HuntState> {
    write_map(out, &hunt.grid().to_string(), colored)?;
    writeln!(
        out,
        "{} sonars, range {}",
        hunt.sonars_left(),
        hunt.config().sonar_range
    )?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let turn = hunt.process_line(&line);
        match &turn.event {
            Event::Plot(map) => write_map(out, map, colored)?,
            event => writeln!(out, "{event}")?,
        }
        if !turn.state.is_running() {
            break;
        }
    }
    writeln!(out, "{}", hunt.state())?;
    Ok(hunt.state())
}
