use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::config::DirectoryConfig;

#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub logs_dir: PathBuf,
    /// Not created until an export is requested.
    pub export_dir: PathBuf,
}

pub fn ensure_directories(cfg: &DirectoryConfig) -> Result<ResolvedPaths> {
    let logs_dir = ensure_dir(Path::new(&cfg.logs_dir))?;

    Ok(ResolvedPaths {
        logs_dir,
        export_dir: PathBuf::from(&cfg.export_dir),
    })
}

/// Creates the export directory if needed and checks it accepts writes.
/// Existing directories keep their permissions.
pub fn prepare_export_dir(dir: &Path) -> Result<PathBuf> {
    let dir = ensure_dir(dir)?;
    check_writable(&dir)?;
    Ok(dir)
}

fn check_writable(dir: &Path) -> Result<()> {
    let marker = dir.join(".write-test");
    fs::write(&marker, b"ok")
        .with_context(|| format!("directory {} is not writable", dir.display()))?;
    fs::remove_file(&marker)?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    Ok(dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()))
}
