// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hyperlink file reading and writing.
//!
//! This module moves hyperlink documents between disk and the codec. JSON
//! is the normal format; the same document can also be written and read as
//! YAML. The format is picked from the file extension.

use super::codec;
use crate::models::hyperlink::Hyperlink;
use crate::models::shared::SharedHyperlink;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

/// On-disk container for a hyperlink document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Write hyperlinks to `path`.
pub fn save_links(links: &[Hyperlink], path: &Path) -> Result<()> {
    let doc = codec::save(links);
    let text = match FileFormat::from_path(path)? {
        FileFormat::Json => serde_json::to_string_pretty(&doc)?,
        FileFormat::Yaml => serde_yaml::to_string(&doc)?,
    };
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Saved {} hyperlinks to {}", links.len(), path.display());
    Ok(())
}

/// Write shared hyperlinks without holding any lock during file I/O.
pub fn save_shared(links: &[SharedHyperlink], path: &Path) -> Result<()> {
    let snapshot: Vec<Hyperlink> = links.iter().map(SharedHyperlink::snapshot).collect();
    save_links(&snapshot, path)
}

/// Read hyperlinks from `path`, accepting the legacy frame-keyed layout too.
pub fn load_links(path: &Path) -> Result<Vec<Hyperlink>> {
    let format = FileFormat::from_path(path)?;
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: Value = match format {
        FileFormat::Json => serde_json::from_str(&text)?,
        FileFormat::Yaml => serde_yaml::from_str(&text)?,
    };

    let links = codec::load_any(&doc)
        .inspect_err(|e| log::warn!("Rejected hyperlink file {}: {}", path.display(), e))?;
    log::info!("Loaded {} hyperlinks from {}", links.len(), path.display());
    Ok(links)
}
