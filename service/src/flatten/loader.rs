//! Cached loading of schema documents
//!
//! A broken reference must not abort a flattening run, so [`DocumentLoader::load`]
//! never fails: a missing or unparsable file is logged and comes back as an
//! empty document. [`DocumentLoader::try_load`] exposes the error for callers
//! that do want to stop, such as the OpenAPI converter's root document.

use crate::parser::Parser;
use schemaviz_core::error::{Result, SchemaVizError};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// A parsed document together with the file it came from
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    path: PathBuf,
    root: Value,
}

impl SchemaDocument {
    /// Wrap an already parsed tree
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, root: Value) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    /// Stand-in for a document that could not be loaded
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Value::Object(Map::new()))
    }

    /// Path the document was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that relative references inside this document resolve against
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Root of the parsed tree
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }
}

/// Counters describing the work a loader has done since its last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderStats {
    /// Files read and parsed
    pub parsed: usize,
    /// Loads answered from the cache
    pub cache_hits: usize,
    /// Loads that failed and produced an empty document
    pub failures: usize,
}

/// Loads documents relative to a base directory, parsing each file once
pub struct DocumentLoader {
    parser: Parser,
    base_path: PathBuf,
    cache: HashMap<PathBuf, Arc<SchemaDocument>>,
    stats: LoaderStats,
}

impl DocumentLoader {
    /// Create a loader resolving relative paths against `base_path`
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_parser(base_path, Parser::new())
    }

    /// Create a loader with a custom parser
    #[must_use]
    pub fn with_parser(base_path: impl Into<PathBuf>, parser: Parser) -> Self {
        Self {
            parser,
            base_path: base_path.into(),
            cache: HashMap::new(),
            stats: LoaderStats::default(),
        }
    }

    /// Directory relative paths are resolved against
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Absolute paths are kept, relative ones are joined to the base directory
    #[must_use]
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Load a document, or an empty one if the file is missing or broken
    pub fn load(&mut self, path: &Path) -> Arc<SchemaDocument> {
        match self.try_load(path) {
            Ok(document) => document,
            Err(err) => {
                let full_path = self.resolve_path(path);
                match &err {
                    SchemaVizError::IoError(io) if io.kind() == ErrorKind::NotFound => {
                        warn!("Could not find file: {}", full_path.display());
                    }
                    _ => warn!("Error loading {}: {err}", full_path.display()),
                }
                self.stats.failures += 1;
                Arc::new(SchemaDocument::empty(full_path))
            }
        }
    }

    /// Load a document, reporting why it could not be read or parsed
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file does not exist or cannot be read, and
    /// a parse error if its content is not valid YAML/JSON.
    pub fn try_load(&mut self, path: &Path) -> Result<Arc<SchemaDocument>> {
        let full_path = self.resolve_path(path);
        let cache_key = fs::canonicalize(&full_path)?;

        if let Some(document) = self.cache.get(&cache_key) {
            self.stats.cache_hits += 1;
            return Ok(Arc::clone(document));
        }

        let root = self.parser.parse_file(&cache_key)?;
        self.stats.parsed += 1;
        debug!("Parsed {}", cache_key.display());

        let document = Arc::new(SchemaDocument::new(cache_key.clone(), root));
        self.cache.insert(cache_key, Arc::clone(&document));
        Ok(document)
    }

    /// Whether the file behind `path` is already cached
    #[must_use]
    pub fn is_cached(&self, path: &Path) -> bool {
        fs::canonicalize(self.resolve_path(path)).is_ok_and(|key| self.cache.contains_key(&key))
    }

    /// Counters since the last [`DocumentLoader::clear`]
    #[must_use]
    pub const fn stats(&self) -> LoaderStats {
        self.stats
    }

    /// Drop every cached document and reset the counters
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats = LoaderStats::default();
    }
}
