//! Terminal front end of the sonar treasure hunt.

pub mod cli;
pub mod play;
pub mod render;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use sonar_hunt::{HuntError, SeaGen, TreasureHunt};
use sonar_paths::Grid;

use cli::Args;

pub use play::play;

/// Start the hunt described by `args`: the given map file, or else a
/// random sea.
pub fn start_hunt(args: &Args) -> Result<TreasureHunt, HuntError> {
    if let Some(path) = &args.map {
        log::info!("loading map {}", path.display());
        return TreasureHunt::load(path, args.config());
    }
    let size = args.random.unwrap_or_default();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("generating a {size} sea with seed {seed}");
    let rows = SeaGen::new(StdRng::seed_from_u64(seed)).generate(
        size.width,
        size.height,
        args.islands,
    )?;
    Ok(TreasureHunt::new(Grid::from_rows(&rows)?, args.config()))
}
