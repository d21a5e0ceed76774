//! Durable cart snapshot storage
//!
//! A single JSON file plays the role of the `"cart"` key in a local
//! key-value store: the whole line collection is written wholesale after
//! every mutation and read back once at startup. There is no schema
//! version; a snapshot that fails to parse is treated as absent.

use crate::cart::CartLine;
use crate::error::{CartError, CartResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-backed storage for the cart snapshot
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot, if a usable one exists.
    ///
    /// Returns `None` for a missing file, unreadable file, malformed
    /// JSON, or a snapshot that violates the line invariants (zero
    /// quantity, duplicate product IDs). Starting empty is the intended
    /// recovery for all of these; no error reaches the caller.
    pub async fn try_load(&self) -> Option<Vec<CartLine>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                debug!("No usable cart snapshot at {}: {}", self.path.display(), e);
                return None;
            }
        };

        let lines: Vec<CartLine> = match serde_json::from_str(&content) {
            Ok(lines) => lines,
            Err(e) => {
                debug!("Malformed cart snapshot at {}: {}", self.path.display(), e);
                return None;
            }
        };

        if !Self::is_valid(&lines) {
            debug!("Invalid cart snapshot at {}", self.path.display());
            return None;
        }

        Some(lines)
    }

    /// Overwrite the snapshot with the full line collection
    pub async fn save(&self, lines: &[CartLine]) -> CartResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CartError::io("creating cart store directory", e))?;
        }

        let content = serde_json::to_string_pretty(lines)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| CartError::io(format!("writing cart snapshot {}", self.path.display()), e))?;

        Ok(())
    }

    // Lines persist only with quantity >= 1 and one line per product.
    fn is_valid(lines: &[CartLine]) -> bool {
        lines.iter().all(|line| line.quantity >= 1)
            && lines
                .iter()
                .all(|line| lines.iter().filter(|l| l.id == line.id).count() == 1)
    }
}
