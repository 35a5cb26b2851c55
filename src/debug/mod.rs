//! Optional diagnostic export of the live state for external tooling.

use crate::store::{Cell, Merge};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub fn export_state<S, C>(cell: &C) -> Result<String>
where
    S: Merge + Serialize,
    C: Cell<S>,
{
    serde_json::to_string_pretty(cell.get_state()).with_context(|| "Failed to serialize state")
}

pub fn write_export<S, C>(cell: &C, path: &Path) -> Result<()>
where
    S: Merge + Serialize,
    C: Cell<S>,
{
    let json = export_state(cell)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write state export to {}", path.display()))?;
    tracing::info!("State exported to {}", path.display());
    Ok(())
}
