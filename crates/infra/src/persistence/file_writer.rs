// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use rangekit_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        Self::write_via_temp(path, data).map_err(|source| InfrastructureError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_via_temp(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // Same directory as the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        let written = w.write_all(data).and_then(|()| w.flush());
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        let _ = w.get_ref().sync_all();
        drop(w);

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
