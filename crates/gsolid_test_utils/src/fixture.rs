use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway project directory.
pub struct Fixture {
  dir: TempDir,
}

impl Fixture {
  pub fn new() -> Self {
    Self {
      dir: tempfile::tempdir().unwrap(),
    }
  }

  pub fn with_files(files: &[(&str, &str)]) -> Self {
    let fixture = Self::new();
    for (relative, contents) in files {
      fixture.write(relative, contents);
    }
    fixture
  }

  pub fn root(&self) -> &Path {
    self.dir.path()
  }

  pub fn path(&self, relative: &str) -> PathBuf {
    self.dir.path().join(relative)
  }

  /// Writes `contents` to `relative`, creating missing directories on the way.
  pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
    let path = self.path(relative);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
  }
}

impl Default for Fixture {
  fn default() -> Self {
    Self::new()
  }
}
