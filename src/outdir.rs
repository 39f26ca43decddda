use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// The directory the external tool writes its splat into.
pub struct OutputDir {
    directory: PathBuf,
}

impl OutputDir {
    /// Creates the directory and all missing parents. Idempotent: an already
    /// existing directory is not an error.
    pub fn prepare(directory: PathBuf) -> Result<Self> {
        fs::create_dir_all(&directory)
            .with_context(|| format!("Cannot create output directory {directory:?}"))?;
        Ok(OutputDir { directory })
    }

    pub fn path(&self) -> &Path {
        &self.directory
    }

    /// First `.ply` entry in directory enumeration order, if any.
    ///
    /// The order is whatever the filesystem yields; callers that need a
    /// deterministic pick should arrange for a single candidate.
    pub fn first_ply(&self) -> Result<Option<PathBuf>> {
        for entry in fs::read_dir(&self.directory)
            .with_context(|| format!("Cannot read output directory {:?}", self.directory))?
        {
            let path = entry?.path();
            if path.extension() == Some("ply".as_ref()) {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_creates_missing_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("out");

        let outdir = OutputDir::prepare(nested.clone()).unwrap();

        assert!(nested.is_dir());
        assert_eq!(outdir.path(), nested);
    }

    #[test]
    fn prepare_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out");

        OutputDir::prepare(path.clone()).unwrap();
        OutputDir::prepare(path.clone()).unwrap();

        assert!(path.is_dir());
    }

    #[test]
    fn first_ply_in_empty_directory_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let outdir = OutputDir::prepare(tmp.path().join("out")).unwrap();

        assert_eq!(outdir.first_ply().unwrap(), None);
    }

    #[test]
    fn first_ply_skips_other_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        let outdir = OutputDir::prepare(tmp.path().join("out")).unwrap();
        fs::write(outdir.path().join("preview.png"), b"png").unwrap();
        fs::write(outdir.path().join("log.txt"), b"log").unwrap();

        assert_eq!(outdir.first_ply().unwrap(), None);
    }

    #[test]
    fn first_ply_finds_generated_splat() {
        let tmp = tempfile::tempdir().unwrap();
        let outdir = OutputDir::prepare(tmp.path().join("out")).unwrap();
        fs::write(outdir.path().join("preview.png"), b"png").unwrap();
        fs::write(outdir.path().join("model.ply"), b"ply").unwrap();

        let found = outdir.first_ply().unwrap();
        assert_eq!(found, Some(outdir.path().join("model.ply")));
    }
}
