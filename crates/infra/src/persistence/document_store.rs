// crates/infra/src/persistence/document_store.rs
use std::path::Path;

use rangekit_domain::RangeDocument;
use rangekit_shared_kernel::{ErrorContext, InfrastructureError, Result};

use super::{FileReader, FileWriter};

/// On-disk encodings of a [`RangeDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }.into()),
        }
    }

    pub fn decode(self, text: &str) -> Result<RangeDocument> {
        let doc: RangeDocument = match self {
            Self::Json => serde_json::from_str(text)?,
            #[cfg(feature = "yaml")]
            Self::Yaml => serde_yaml::from_str(text)?,
        };
        doc.validate()?;
        Ok(doc)
    }

    pub fn encode(self, doc: &RangeDocument) -> Result<String> {
        Ok(match self {
            Self::Json => {
                let mut text = serde_json::to_string_pretty(doc)?;
                text.push('\n');
                text
            }
            #[cfg(feature = "yaml")]
            Self::Yaml => serde_yaml::to_string(doc)?,
        })
    }
}

/// Loads and saves range documents, choosing the encoding by extension.
pub struct RangeDocumentStore;

impl RangeDocumentStore {
    pub fn load(path: &Path) -> Result<RangeDocument> {
        let format = DocumentFormat::from_path(path)?;
        let text = FileReader::read_to_string(path)?;
        let doc = format
            .decode(&text)
            .with_context(|| format!("loading range document '{}'", path.display()))?;
        if doc.migrated() {
            log::info!(
                "'{}' uses schema generation {}; legacy fields were migrated",
                path.display(),
                doc.schema_version()
            );
        }
        log::debug!("loaded {} range(s) from '{}'", doc.len(), path.display());
        Ok(doc)
    }

    /// Writes `doc` in the current schema, replacing `path` atomically.
    pub fn save(path: &Path, doc: &RangeDocument) -> Result<()> {
        let format = DocumentFormat::from_path(path)?;
        let mut current = doc.clone();
        current.upgrade();
        let text = format.encode(&current)?;
        FileWriter::atomic_write(path, text.as_bytes())?;
        log::debug!("saved {} range(s) to '{}'", current.len(), path.display());
        Ok(())
    }
}
