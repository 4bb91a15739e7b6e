use std::{
  fmt::Display,
  path::{Path, PathBuf},
};

use crate::ErrorKind;

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    self.kind.to_string().eq(&other.kind.to_string())
  }
}

impl Eq for Error {}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: String) -> Self {
    self.contexts.push(context);
    self
  }

  pub fn code(&self) -> &'static str {
    self.kind.code()
  }

  // --- Resolution

  pub fn unresolved_import(specifier: impl Into<String>, importer: Option<&Path>) -> Self {
    Self::with_kind(ErrorKind::UnresolvedImport {
      specifier: specifier.into(),
      importer: importer.map(Path::to_path_buf),
    })
  }

  pub fn invalid_filter(pattern: impl Into<String>, reason: impl Display) -> Self {
    Self::with_kind(ErrorKind::InvalidFilter {
      pattern: pattern.into(),
      reason: reason.to_string(),
    })
  }

  // --- Transform pipeline

  pub fn parse_failed(file: impl AsRef<Path>, reason: impl Display) -> Self {
    Self::with_kind(ErrorKind::ParseFailed {
      file: file.as_ref().to_path_buf(),
      reason: reason.to_string(),
    })
  }

  pub fn compiler_failed_silently(file: impl AsRef<Path>) -> Self {
    Self::with_kind(ErrorKind::CompilerFailedSilently {
      file: file.as_ref().to_path_buf(),
    })
  }

  // --- IO

  pub fn read_file_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::ReadFileFailed {
      path: path.into(),
      source,
    })
  }

  pub fn io_error(e: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::IoError(e))
  }

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::convert::From<std::io::Error> for Error {
  fn from(value: std::io::Error) -> Self {
    Self::io_error(value)
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::Panic { source, .. } => Some(source.as_ref()),
      ErrorKind::ReadFileFailed { source, .. } => Some(source),
      ErrorKind::IoError(source) => Some(source),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
