//! Storage-layer date source

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Birth and modification times for a file, as millisecond epoch values.
#[derive(Debug, Clone, Copy)]
pub struct FileTimes {
    /// Birth time, when the platform/filesystem records one.
    pub birth_ms: Option<i64>,
    /// Modification time.
    pub modified_ms: i64,
}

/// Stats `path`. A missing or unreadable file is fatal to resolution; a
/// filesystem that simply does not track birth times is not.
pub fn stat(path: &Path) -> Result<FileTimes> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to stat file: {}", path.display()))?;

    let modified = metadata
        .modified()
        .with_context(|| format!("No modification time for: {}", path.display()))?;

    Ok(FileTimes {
        birth_ms: metadata.created().ok().map(epoch_ms),
        modified_ms: epoch_ms(modified),
    })
}

fn epoch_ms(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_millis() as i64,
        // Pre-epoch mtimes exist in the wild (archives, touch -d)
        Err(e) => -(e.duration().as_millis() as i64),
    }
}
