//! Git repository detection

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::{Error, Result};

/// The repository a diff is taken from
#[derive(Debug, Clone)]
pub struct GitRepo {
    /// Path to the repository root (its working tree)
    root: PathBuf,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// This will search upward from the given path to find the repository root.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::NotARepository(path.to_path_buf())
            } else {
                Error::from(e)
            }
        })?;

        let root = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repositories have no working tree to diff".to_string()))?
            .to_path_buf();

        Ok(Self { root })
    }

    /// Get the repository root path
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_initialized_repo() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        let nested = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let repo = GitRepo::open(&nested).unwrap();
        assert_eq!(
            repo.root().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_bare_repo_is_rejected() {
        let dir = TempDir::new().unwrap();
        Repository::init_bare(dir.path()).unwrap();
        let result = GitRepo::open(dir.path());
        assert!(matches!(result, Err(Error::Git(_))));
    }

    #[test]
    fn test_open_non_git_dir() {
        let dir = TempDir::new().unwrap();
        if Repository::discover(dir.path()).is_ok() {
            // Temp dir lives inside some enclosing repository; nothing to assert.
            return;
        }
        let result = GitRepo::open(dir.path());
        assert!(matches!(result, Err(Error::NotARepository(_))));
    }
}
