// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Explorant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Explorant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use super::document::EditsDocument;

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Temp file renamed into place, no fsync.
    #[default]
    BestEffort,

    /// Also syncs the file contents and, on unix, the containing directory.
    Durable,
}

/// An edits document on disk.
#[derive(Debug, Clone)]
pub struct EditsFile {
    path: PathBuf,
    durability: WriteDurability,
}

impl EditsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), durability: WriteDurability::default() }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<EditsDocument, StoreError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;
        EditsDocument::from_json(&text)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })
    }

    /// Replaces the file as a whole; readers never observe a partial document.
    pub fn save(&self, document: &EditsDocument) -> Result<(), StoreError> {
        let json = document
            .to_json()
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        write_atomic(&self.path, json.as_bytes(), self.durability)?;
        debug!(
            "edits saved path={:?} nodes={} modules={}",
            self.path,
            document.nodes.len(),
            document.modules.len()
        );
        Ok(())
    }
}

fn write_atomic(
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    write_atomic_with(path, durability, |file| file.write_all(contents))
}

/// Creates a temp file next to `path`, lets `fill` write it, then renames it into place.
/// The temp file is removed on every failure path.
fn write_atomic_with(
    path: &Path,
    durability: WriteDurability,
    fill: impl FnOnce(&mut fs::File) -> io::Result<()>,
) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };
    fs::create_dir_all(parent).map_err(io_err(parent))?;

    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
    let tmp_path = parent.join(format!(".explorant.tmp.{}.{nanos}", file_name.to_string_lossy()));

    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(io_err(&tmp_path))?;
    if let Err(source) = fill_temp(file, fill, durability) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: tmp_path, source });
    }

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    #[cfg(unix)]
    {
        if durability == WriteDurability::Durable {
            let dir = fs::File::open(parent).map_err(io_err(parent))?;
            dir.sync_all().map_err(io_err(parent))?;
        }
    }

    Ok(())
}

fn fill_temp(
    mut file: fs::File,
    fill: impl FnOnce(&mut fs::File) -> io::Result<()>,
    durability: WriteDurability,
) -> io::Result<()> {
    fill(&mut file)?;
    if durability == WriteDurability::Durable {
        file.sync_all()?;
    }
    Ok(())
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            other => other,
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}
