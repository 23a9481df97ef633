use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};

use clap::Parser;

use treasure_hunt_lib::cli::Args;
use treasure_hunt_lib::{play, start_hunt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    let mut hunt = start_hunt(&args)?;
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let stdout = io::stdout();
    let colored = stdout.is_terminal();
    let state = play(&mut hunt, input, &mut stdout.lock(), colored)?;
    log::info!("hunt finished: {state}");
    Ok(())
}
