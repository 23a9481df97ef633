//! Command-line arguments.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use sonar_hunt::HuntConfig;

#[derive(Parser, Debug)]
#[command(name = "treasure-hunt")]
#[command(about = "Sail a sea map, drop sonars and plot a course to the treasure", long_about = None)]
pub struct Args {
    /// Map file; a random sea is generated when omitted
    #[arg(conflicts_with = "random")]
    pub map: Option<PathBuf>,

    /// Size of the random sea, as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub random: Option<SeaSize>,

    /// Seed for the random sea
    #[arg(long)]
    pub seed: Option<u64>,

    /// Share of islands in the random sea
    #[arg(long, default_value_t = 0.2)]
    pub islands: f64,

    /// Number of sonars
    #[arg(long, default_value_t = HuntConfig::DEFAULT.sonars)]
    pub sonars: u32,

    /// Sonar detection range, in step distance
    #[arg(long, default_value_t = HuntConfig::DEFAULT.sonar_range)]
    pub range: u32,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config(&self) -> HuntConfig {
        HuntConfig::default()
            .with_sonars(self.sonars)
            .with_range(self.range)
    }

    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Random sea dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeaSize {
    pub width: usize,
    pub height: usize,
}

impl Default for SeaSize {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
        }
    }
}

impl fmt::Display for SeaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for SeaSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got \u{201c}{s}\u{201d}"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| format!("bad dimension \u{201c}{v}\u{201d}: {e}"))
        };
        Ok(Self {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["treasure-hunt"]).unwrap();
        assert_eq!(args.map, None);
        assert_eq!(args.config(), HuntConfig::default());
        assert_eq!(args.log_filter(), "warn");
        assert_eq!(args.islands, 0.2);
    }

    #[test]
    fn full_command_line() {
        let args = Args::try_parse_from([
            "treasure-hunt",
            "--random",
            "30x12",
            "--seed",
            "9",
            "--sonars",
            "5",
            "--range",
            "50",
            "--script",
            "moves.txt",
            "-vv",
        ])
        .unwrap();
        assert_eq!(
            args.random,
            Some(SeaSize {
                width: 30,
                height: 12
            })
        );
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.config(), HuntConfig::new(5, 50));
        assert_eq!(args.script, Some(PathBuf::from("moves.txt")));
        assert_eq!(args.log_filter(), "debug");
    }

    #[test]
    fn map_and_random_conflict() {
        assert!(Args::try_parse_from(["treasure-hunt", "sea.txt", "--random", "5x5"]).is_err());
    }

    #[test]
    fn sea_size() {
        assert_eq!("7x3".parse(), Ok(SeaSize { width: 7, height: 3 }));
        assert_eq!(SeaSize::default().to_string(), "20x10");
        assert!("7".parse::<SeaSize>().is_err());
        assert!("ax3".parse::<SeaSize>().is_err());
    }
}
