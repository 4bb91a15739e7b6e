use std::{
  fmt::Display,
  path::{Path, PathBuf},
  sync::Arc,
};

use crate::{utils::PathExt, Error};

/// Where a [Message] points to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
  pub file: PathBuf,
  /// 1-based
  pub line: Option<usize>,
  /// 0-based, in bytes
  pub column: Option<usize>,
  pub line_text: Option<String>,
}

impl Location {
  pub fn file(file: impl Into<PathBuf>) -> Self {
    Self {
      file: file.into(),
      ..Default::default()
    }
  }
}

/// A warning or an error reported back to the host, in the shape esbuild plugins use.
#[derive(Debug, Clone, Default)]
pub struct Message {
  pub text: String,
  pub location: Option<Location>,
  /// The original error, kept as is so the host can inspect it.
  pub detail: Option<Arc<Error>>,
}

impl Message {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      ..Default::default()
    }
  }

  pub fn with_location(mut self, location: Location) -> Self {
    self.location = Some(location);
    self
  }

  /// Wraps `err` as the `detail` of a message located at `file`.
  pub fn from_error(err: Error, file: impl AsRef<Path>) -> Self {
    Self {
      text: err.to_string(),
      location: Some(Location::file(file.as_ref())),
      detail: Some(Arc::new(err)),
    }
  }

  pub fn code(&self) -> Option<&'static str> {
    self.detail.as_ref().map(|detail| detail.code())
  }
}

impl Display for Message {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.location {
      Some(Location {
        file,
        line: Some(line),
        column,
        ..
      }) => write!(
        f,
        "{}:{line}:{}: {}",
        file.may_display_relative(),
        column.unwrap_or(0),
        self.text
      ),
      Some(Location { file, .. }) => write!(f, "{}: {}", file.may_display_relative(), self.text),
      None => self.text.fmt(f),
    }
  }
}
