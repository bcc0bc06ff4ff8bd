//! Persisted trail records.
//!
//! The store is a JSON object mapping each starting article to its trail as an
//! array of identifiers:
//!
//! ```json
//! {
//!     "Rose": [
//!         "Rose",
//!         "Woody_plant",
//!         "Philosophy"
//!     ]
//! }
//! ```
//!
//! Keys are written in sorted order with four-space indentation. A run loads
//! the existing file, merges its own trails in (same key replaced, other keys
//! untouched) and writes the whole set back.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::article::ArticleId;
use crate::error::{Error, Result};
use crate::trail::{Trail, TrailCollection};

/// Default store file name.
pub const DEFAULT_STORE_FILE: &str = "trails.json";

/// Trails keyed by starting article, sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailStore {
    records: BTreeMap<ArticleId, Vec<ArticleId>>,
}

fn store_error(path: &Path, source: io::Error) -> Error {
    Error::Store {
        path: path.to_path_buf(),
        source,
    }
}

impl TrailStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`; a missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no trail store yet");
                return Ok(Self::new());
            }
            Err(err) => return Err(store_error(path, err)),
        };
        Self::from_json(&text)
    }

    /// Parses store JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        let records = serde_json::from_str(text)?;
        Ok(Self { records })
    }

    /// Store JSON: sorted keys, four-space indentation, trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.records.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only ever writes UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the store to `path` through a sibling temporary file and a rename.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;

        let tmp = temp_path(path);
        let mut file = fs::File::create(&tmp).map_err(|e| store_error(&tmp, e))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| store_error(&tmp, e))?;
        drop(file);
        fs::rename(&tmp, path).map_err(|e| store_error(path, e))?;

        debug!(path = %path.display(), records = self.records.len(), "saved trail store");
        Ok(())
    }

    /// Records `trail` under its start, replacing any earlier record.
    pub fn insert(&mut self, trail: &Trail) -> Option<Vec<ArticleId>> {
        self.records
            .insert(trail.start().clone(), trail.articles().to_vec())
    }

    /// Records every trail of `collection`, whatever its state.
    pub fn merge(&mut self, collection: &TrailCollection) {
        for trail in collection {
            self.insert(trail);
        }
    }

    /// Stored trail for `start`.
    #[must_use]
    pub fn get(&self, start: &str) -> Option<&[ArticleId]> {
        self.records.get(start).map(Vec::as_slice)
    }

    /// Records in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArticleId, &[ArticleId])> {
        self.records.iter().map(|(k, v)| (k, v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
