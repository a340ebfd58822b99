//! Named shortcode resources and the name pattern that classifies them.
//!
//! A resource is an opaque named byte blob holding one flattened shortcode
//! table. Its name tells which `(language, database)` pair it belongs to; the
//! [`ResourcePattern`] recovers that pair through the `lang` and `source`
//! capture groups.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{CatalogError, CatalogResult};

/// Default pattern matching `shortcodes.<lang>.<source>.tsv`.
pub const DEFAULT_RESOURCE_PATTERN: &str =
    r"^shortcodes\.(?P<lang>[\w\-]+)\.(?P<source>[\w\-]+)\.tsv$";

static DEFAULT_PATTERN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_RESOURCE_PATTERN).expect("Invalid default resource pattern")
});

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/embedded_resources.rs"));
}

/// A set of named byte blobs.
pub trait ResourceSource: Send + Sync {
    /// Lists every resource name. Order is the enumeration order used when
    /// building the index.
    fn names(&self) -> io::Result<Vec<String>>;

    /// Opens one resource by name.
    fn open(&self, name: &str) -> io::Result<Cow<'_, [u8]>>;
}

/// The shortcode tables embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    /// Number of embedded resources.
    pub fn len(&self) -> usize {
        embedded::EMBEDDED.len()
    }

    /// Returns true if nothing was embedded.
    pub fn is_empty(&self) -> bool {
        embedded::EMBEDDED.is_empty()
    }
}

impl ResourceSource for EmbeddedResources {
    fn names(&self) -> io::Result<Vec<String>> {
        Ok(embedded::EMBEDDED
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect())
    }

    fn open(&self, name: &str) -> io::Result<Cow<'_, [u8]>> {
        embedded::EMBEDDED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, data)| Cow::Borrowed(*data))
            .ok_or_else(|| not_found(name))
    }
}

/// Owned in-memory resources, enumerated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    blobs: IndexMap<String, Vec<u8>>,
}

impl MemoryResources {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource, builder style.
    pub fn with(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }

    /// Adds or replaces a resource.
    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.blobs.insert(name.into(), data.into());
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl ResourceSource for MemoryResources {
    fn names(&self) -> io::Result<Vec<String>> {
        Ok(self.blobs.keys().cloned().collect())
    }

    fn open(&self, name: &str) -> io::Result<Cow<'_, [u8]>> {
        self.blobs
            .get(name)
            .map(|data| Cow::Borrowed(data.as_slice()))
            .ok_or_else(|| not_found(name))
    }
}

/// Resources read from the files of a directory (non-recursive).
///
/// Resource names are file names. Files are listed in name order.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    /// Creates a source over `root`. The directory is not read until the
    /// index is built.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSource for DirectoryResources {
    fn names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn open(&self, name: &str) -> io::Result<Cow<'_, [u8]>> {
        if name.contains(['/', '\\']) {
            return Err(not_found(name));
        }
        std::fs::read(self.root.join(name)).map(Cow::Owned)
    }
}

fn not_found(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no resource named '{}'", name),
    )
}

/// Regular expression extracting `(language, database)` from resource names.
#[derive(Debug, Clone)]
pub struct ResourcePattern {
    regex: Regex,
}

impl ResourcePattern {
    /// Compiles a pattern. It must define the `lang` and `source` groups.
    pub fn new(pattern: &str) -> CatalogResult<Self> {
        let regex = Regex::new(pattern)?;
        for group in ["lang", "source"] {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(CatalogError::MissingCaptureGroup(group));
            }
        }
        Ok(Self { regex })
    }

    /// Returns the pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Extracts the trimmed `(language, database)` pair from a resource name.
    ///
    /// Returns `None` when the name does not match or either part is blank.
    pub fn classify(&self, name: &str) -> Option<(String, String)> {
        let captures = self.regex.captures(name)?;
        let lang = captures.name("lang")?.as_str().trim();
        let source = captures.name("source")?.as_str().trim();
        if lang.is_empty() || source.is_empty() {
            return None;
        }
        Some((lang.to_string(), source.to_string()))
    }
}

impl Default for ResourcePattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_PATTERN_REGEX.clone(),
        }
    }
}
