// src/cache/response.rs

use anyhow::{Context, Result};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info};

use crate::fetch::RawResponse;

/// Raw API replies on disk as `<dir>/<key>.json`.
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("creating cache directory {:?}", dir))?;
        Ok(Self { dir })
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// `Ok(None)` on a miss. A corrupt entry is logged, removed and treated as a miss.
    pub fn load(&self, key: &str) -> Result<Option<RawResponse>> {
        let path = self.path(key);
        if !path.exists() {
            debug!(key, "response cache miss");
            return Ok(None);
        }
        let text = fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))?;
        match RawResponse::from_json(&text) {
            Ok(raw) => {
                info!(key, rows = raw.rows.len(), "response cache hit");
                Ok(Some(raw))
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "discarding corrupt cache entry");
                self.invalidate(key)?;
                Ok(None)
            }
        }
    }

    /// Write through a temp file and rename over the entry.
    pub fn store(&self, key: &str, raw: &RawResponse) -> Result<PathBuf> {
        let path = self.path(key);
        let tmp_path = self.dir.join(format!(".{}.json.tmp", key));

        let mut tmp = fs::File::create(&tmp_path)
            .with_context(|| format!("creating {:?}", tmp_path))?;
        tmp.write_all(raw.to_json()?.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.sync_all()?;
        drop(tmp);

        fs::rename(&tmp_path, &path)
            .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
        debug!(path = %path.display(), "stored response");
        Ok(path)
    }

    /// Returns whether an entry was removed.
    pub fn invalidate(&self, key: &str) -> Result<bool> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("removing {:?}", path))?;
        info!(key, "invalidated cached response");
        Ok(true)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
