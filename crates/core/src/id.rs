//! Record identifiers.
//!
//! Records are identified by a UUID in canonical form: **32 lowercase
//! hexadecimal characters** with no hyphens, e.g.
//! `550e8400e29b41d4a716446655440000`. This is what
//! `Uuid::new_v4().simple().to_string()` produces.
//!
//! Identifiers are assigned by the store on insert and are opaque to clients.
//! Externally supplied identifiers are checked with [`RecordId::parse`]; any
//! other spelling (uppercase, hyphenated, wrong length) is rejected.
//!
//! The file-backed store shards documents by the first four hex characters:
//! `<collection>/<id[0..2]>/<id[2..4]>/<id>.json`.

use crate::constants::DOCUMENT_EXTENSION;
use crate::{ContentError, ContentResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// A record identifier in canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(Uuid);

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier that must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] when `input` is not canonical: an
    /// identifier that cannot have been issued by a store names no record.
    pub fn parse(input: &str) -> ContentResult<Self> {
        if !Self::is_canonical(input) {
            return Err(ContentError::NotFound(input.to_string()));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| ContentError::NotFound(input.to_string()))
    }

    /// Purely syntactic check: 32 bytes of `0-9a-f`.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns `collection_dir/<s1>/<s2>/<id>.json`.
    pub fn document_path(&self, collection_dir: &Path) -> PathBuf {
        let canonical = self.to_string();
        collection_dir
            .join(&canonical[0..2])
            .join(&canonical[2..4])
            .join(format!("{canonical}.{DOCUMENT_EXTENSION}"))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(serde::de::Error::custom)
    }
}
