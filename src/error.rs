use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error returned when a level image cannot be turned into a playable map.
///
/// No partial map is ever produced: scene construction must abort on any of these.
#[derive(Debug)]
pub enum LoadError {
    /// The map path does not resolve or could not be read
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The bytes could not be decoded as an image
    Decode {
        /// Path of the offending file
        path: PathBuf,
        /// Decoder error
        source: macroquad::Error,
    },
    /// The image decoded to zero columns or zero rows
    EmptyImage {
        /// Path of the offending file, if the image came from disk
        path: Option<PathBuf>,
    },
    /// No spawn marker and no walkable cell to fall back to
    NoSpawn {
        /// Grid columns
        width: usize,
        /// Grid rows
        height: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "I/O error reading map {}: {}", path.display(), source)
            }
            LoadError::Decode { path, source } => {
                write!(f, "Failed to decode map image {}: {}", path.display(), source)
            }
            LoadError::EmptyImage { path: Some(path) } => {
                write!(f, "Map image {} has no pixels", path.display())
            }
            LoadError::EmptyImage { path: None } => write!(f, "Map image has no pixels"),
            LoadError::NoSpawn { width, height } => write!(
                f,
                "No player spawn in {width}x{height} map: no spawn marker and no empty tile"
            ),
        }
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
