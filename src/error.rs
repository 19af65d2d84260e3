//! Error type shared by the catalog, index, and route builder.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading an instance or constructing routes.
///
/// Malformed input lines are not errors: the catalog skips them.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be read.
    #[error("failed to read load file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input was readable but contained no valid load records.
    #[error("no valid load records found")]
    EmptyInput,

    /// A route was seeded while every load was already planned.
    #[error("no unplanned load left to seed a route")]
    NoCandidate,
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
