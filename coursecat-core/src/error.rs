use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog or exporting a selection
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A source table could not be read
    #[error("Failed to fetch {}: {source}", path.display())]
    Fetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The download was requested while no tile was visible
    #[error("No courses selected for download.")]
    NothingSelected,

    /// An output file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
