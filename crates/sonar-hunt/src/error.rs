use std::fmt;
use std::path::PathBuf;

use sonar_paths::MapError;

/// Errors raised while setting up a hunt.
#[derive(Debug)]
pub enum HuntError {
    /// The map file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The map text is malformed.
    Map(MapError),
    /// The random sea generator gave up.
    Generation(String),
}

impl fmt::Display for HuntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read map {}: {source}", path.display())
            }
            Self::Map(e) => write!(f, "invalid map: {e}"),
            Self::Generation(msg) => write!(f, "sea generation failed: {msg}"),
        }
    }
}

impl std::error::Error for HuntError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Map(e) => Some(e),
            Self::Generation(_) => None,
        }
    }
}

impl From<MapError> for HuntError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}
