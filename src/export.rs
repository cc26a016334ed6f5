// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chartmate-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chartmate and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Writes the paginated export artifact to disk.
//!
//! Export is the only durable output of a session. Files are written to a
//! temp sibling and renamed into place; `Durable` additionally flushes file
//! and directory to stable storage where the platform supports it.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::render::{document_to_text, ExportDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteDurability {
    /// Fast, best-effort persistence: temp file plus atomic rename, no
    /// per-file fsync.
    #[default]
    BestEffort,
    /// Slower: flushes file contents and the rename to stable storage.
    /// Exact guarantees are platform/filesystem-dependent.
    Durable,
}

#[derive(Debug)]
pub enum ExportError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "export failed for {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ExportError + '_ {
    move |source| ExportError::Io { path: path.to_path_buf(), source }
}

/// Writes the document's text projection to `path`.
pub fn write_document(
    path: &Path,
    doc: &ExportDocument,
    durability: WriteDurability,
) -> Result<(), ExportError> {
    let contents = document_to_text(doc);

    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_owned());
    let tmp_path = path.with_file_name(format!(".chartmate.tmp.{file_name}.{nanos}"));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(io_error(&tmp_path))?;
    file.write_all(contents.as_bytes()).map_err(io_error(&tmp_path))?;
    if durability == WriteDurability::Durable {
        file.sync_all().map_err(io_error(&tmp_path))?;
    }
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ExportError::Io { path: path.to_path_buf(), source });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        if let Some(parent) = parent {
            let dir = fs::File::open(parent).map_err(io_error(parent))?;
            dir.sync_all().map_err(io_error(parent))?;
        }
    }

    info!(path = %path.display(), pages = doc.pages.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{write_document, WriteDurability};
    use crate::model::{GeneratedOutput, IntakeRecord, Session};
    use crate::render::{render_report, PageOptions};

    static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

    struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let pid = std::process::id();
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos();
            let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = std::env::temp_dir();
            path.push(format!("chartmate_test_{prefix}_{pid}_{nanos}_{counter}"));
            std::fs::create_dir_all(&path).expect("create temp dir");
            Self { path }
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn writes_the_text_projection() {
        let mut session = Session::new(IntakeRecord::default());
        session.apply_generated(
            1,
            &GeneratedOutput {
                precautions: "[ ] Fall precautions".to_owned(),
                ..GeneratedOutput::default()
            },
        );
        let doc = render_report(session.report(), &PageOptions::default());

        let dir = TempDir::new("export");
        let path = dir.path.join("report.txt");
        write_document(&path, &doc, WriteDurability::BestEffort).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.contains("Precautions & Preventive Measures"));
        assert!(written.contains("☐ Fall precautions"));
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let mut session = Session::new(IntakeRecord::default());
        session.apply_generated(
            1,
            &GeneratedOutput {
                recommendations: "[ ] follow up".to_owned(),
                ..GeneratedOutput::default()
            },
        );
        let doc = render_report(session.report(), &PageOptions::default());

        let dir = TempDir::new("export_tmp");
        let path = dir.path.join("report.txt");
        write_document(&path, &doc, WriteDurability::Durable).expect("write");

        let entries: Vec<_> = std::fs::read_dir(&dir.path)
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["report.txt".to_owned()]);
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = TempDir::new("export_nested");
        let path = dir.path.join("nested/deep/report.txt");
        let doc = render_report(
            Session::new(IntakeRecord::default()).report(),
            &PageOptions::default(),
        );
        write_document(&path, &doc, WriteDurability::BestEffort).expect("write");
        assert!(path.exists());
    }
}
