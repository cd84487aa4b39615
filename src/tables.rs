use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::versions::VersionTable;

lazy_static::lazy_static! {
    /// Directory holding the version tables, configurable via the `SPIDER_UA_DATA_DIR` env variable.
    pub static ref DATA_DIR: PathBuf = std::env::var("SPIDER_UA_DATA_DIR")
        .ok()
        .and_then(|v| if v.is_empty() { None } else { Some(v) })
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")));
}

/// Fetches raw table files by name.
pub trait TableSource {
    /// The json text of the table, or an io error naming the file.
    fn fetch(&self, name: &str) -> Result<String>;
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn fetch(&self, name: &str) -> Result<String> {
        (**self).fetch(name)
    }
}

#[cfg(feature = "embedded-data")]
static EMBEDDED: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "chrome.json" => include_str!("../data/chrome.json"),
    "safari.json" => include_str!("../data/safari.json"),
    "firefox.json" => include_str!("../data/firefox.json"),
    "macos.json" => include_str!("../data/macos.json"),
    "windows.json" => include_str!("../data/windows.json"),
    "ios.json" => include_str!("../data/ios.json"),
    "ipad.json" => include_str!("../data/ipad.json"),
};

/// The tables compiled into the crate.
#[cfg(feature = "embedded-data")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTables;

#[cfg(feature = "embedded-data")]
impl EmbeddedTables {
    /// Names of the bundled tables.
    pub fn names() -> impl Iterator<Item = &'static str> {
        EMBEDDED.keys().copied()
    }
}

#[cfg(feature = "embedded-data")]
impl TableSource for EmbeddedTables {
    fn fetch(&self, name: &str) -> Result<String> {
        EMBEDDED
            .get(name)
            .map(|s| s.to_string())
            .ok_or_else(|| Error::Io {
                file: name.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no embedded table"),
            })
    }
}

/// Tables read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTables {
    root: PathBuf,
}

impl DirectoryTables {
    /// Read tables from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read tables from [`DATA_DIR`].
    pub fn from_env() -> Self {
        Self::new((*DATA_DIR).clone())
    }

    /// The directory tables are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TableSource for DirectoryTables {
    fn fetch(&self, name: &str) -> Result<String> {
        std::fs::read_to_string(self.root.join(name)).map_err(|source| Error::Io {
            file: name.to_string(),
            source,
        })
    }
}

/// Lazily loaded, parsed tables. Each table is fetched at most once until [`TableCache::clear`].
#[derive(Debug)]
pub struct TableCache<S> {
    source: S,
    tables: HashMap<String, Arc<VersionTable>>,
    loads: usize,
}

impl<S: TableSource> TableCache<S> {
    /// An empty cache over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            tables: HashMap::new(),
            loads: 0,
        }
    }

    /// The table named `name`, loading it on first use.
    pub fn get(&mut self, name: &str) -> Result<Arc<VersionTable>> {
        if let Some(table) = self.tables.get(name) {
            return Ok(table.clone());
        }

        self.loads += 1;
        let raw = self.source.fetch(name)?;
        let table = Arc::new(VersionTable::parse(name, &raw)?);

        tracing::debug!(table = name, "loaded version table");

        self.tables.insert(name.to_string(), table.clone());
        Ok(table)
    }

    /// Drop every cached table.
    pub fn clear(&mut self) {
        tracing::debug!(tables = self.tables.len(), "cleared version table cache");
        self.tables.clear();
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// No table is cached.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// How many times the source was asked for a table.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
