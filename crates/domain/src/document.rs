// crates/domain/src/document.rs
use std::collections::BTreeMap;

use rangekit_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::schema::CURRENT_SCHEMA_VERSION;
use crate::value_objects::IntRange;

/// Named table of ranges as persisted on disk.
///
/// Documents written before versioning existed carry no `schema_version`
/// and are treated as generation 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDocument {
    #[serde(default)]
    schema_version: u32,
    #[serde(default)]
    ranges: BTreeMap<String, IntRange>,
}

impl Default for RangeDocument {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            ranges: BTreeMap::new(),
        }
    }
}

impl RangeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects documents written by a newer schema than this build understands.
    pub fn validate(&self) -> DomainResult<()> {
        if self.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(DomainError::UnsupportedSchemaVersion {
                found: self.schema_version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        Ok(())
    }

    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// True when the document was read from an older schema generation.
    pub const fn migrated(&self) -> bool {
        self.schema_version < CURRENT_SCHEMA_VERSION
    }

    /// Stamps the document with the current schema generation.
    pub fn upgrade(&mut self) {
        self.schema_version = CURRENT_SCHEMA_VERSION;
    }

    pub fn get(&self, name: &str) -> Option<IntRange> {
        self.ranges.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, range: IntRange) -> Option<IntRange> {
        self.ranges.insert(name.into(), range)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, IntRange)> {
        self.ranges.iter().map(|(name, range)| (name.as_str(), *range))
    }
}

impl FromIterator<(String, IntRange)> for RangeDocument {
    fn from_iter<I: IntoIterator<Item = (String, IntRange)>>(iter: I) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            ranges: iter.into_iter().collect(),
        }
    }
}
