//! Terminal output of sea maps.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, PrintStyledContent, Stylize, style};
use sonar_paths::{BOAT, ISLAND, PATH, SEA, TREASURE};

fn color(ch: char) -> Color {
    match ch {
        SEA => Color::DarkBlue,
        ISLAND => Color::DarkYellow,
        BOAT => Color::Green,
        TREASURE => Color::Red,
        PATH => Color::Yellow,
        _ => Color::Reset,
    }
}

/// Write `map` followed by a newline, coloring each symbol when `colored`
/// is set.
pub fn write_map(out: &mut impl Write, map: &str, colored: bool) -> io::Result<()> {
    if !colored {
        return writeln!(out, "{map}");
    }
    for line in map.lines() {
        for ch in line.chars() {
            let styled = style(ch).with(color(ch));
            let styled = if ch == PATH { styled.bold() } else { styled };
            queue!(out, PrintStyledContent(styled))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output() {
        let mut out = Vec::new();
        write_map(&mut out, "B*++\n.+*.\n...T", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "B*++\n.+*.\n...T\n");
    }

    fn strip_escapes(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                chars.by_ref().find(|c| c.is_ascii_alphabetic());
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn colored_output_keeps_symbols() {
        let mut out = Vec::new();
        write_map(&mut out, "B*\n+T", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(strip_escapes(&text), "B*\n+T\n");
    }

    #[test]
    fn symbol_colors() {
        assert_eq!(color(PATH), Color::Yellow);
        assert_eq!(color(TREASURE), Color::Red);
        assert_eq!(color('?'), Color::Reset);
    }
}
