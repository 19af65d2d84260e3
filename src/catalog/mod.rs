//! Load catalog: the parsed, immutable set of loads for one run.

mod parser;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::Load;

pub use parser::parse_record;

/// All loads of an instance, in input order.
///
/// Positions in the catalog ("catalog indices") are what the distance index
/// and route builder work with; they do not correlate with load IDs.
///
/// # Examples
///
/// ```
/// use greedy_vrp::catalog::Catalog;
///
/// let catalog = Catalog::parse("loadNumber pickup dropoff\n1 (0,0) (10,0)\n").unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(0).id(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    loads: Vec<Load>,
}

impl Catalog {
    /// Builds a catalog from already constructed loads.
    ///
    /// Fails with [`Error::EmptyInput`] if `loads` is empty.
    pub fn from_loads(loads: Vec<Load>) -> Result<Self> {
        if loads.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut seen = HashSet::with_capacity(loads.len());
        for load in &loads {
            if !seen.insert(load.id()) {
                warn!("load id {} appears more than once", load.id());
            }
        }

        Ok(Self { loads })
    }

    /// Parses every line of `text`, skipping lines that are not records.
    pub fn parse(text: &str) -> Result<Self> {
        let loads: Vec<Load> = text.lines().filter_map(parse_record).collect();
        Self::from_loads(loads)
    }

    /// Reads and parses a load file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&text)?;
        debug!("parsed {} loads from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Loads in input order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Load at catalog position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &Load {
        &self.loads[index]
    }

    /// Number of loads. Never zero.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Always `false`: an empty catalog cannot be built.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
