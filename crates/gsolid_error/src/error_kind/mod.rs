use std::{fmt::Display, path::PathBuf};

use crate::utils::PathExt;

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  // --- Resolution
  UnresolvedImport {
    specifier: String,
    importer: Option<PathBuf>,
  },
  InvalidFilter {
    pattern: String,
    reason: String,
  },

  // --- Transform pipeline
  ParseFailed {
    file: PathBuf,
    reason: String,
  },
  /// The markup compiler returned nothing and did not report why.
  CompilerFailedSilently {
    file: PathBuf,
  },

  /// Unrecoverable error raised by a collaborator.
  ///
  /// This is also how a plain error `throw`n by the markup compiler is carried around.
  /// For `throw new Error("Errored")`, use `Error::from(anyhow::format_err!("Errored"))`.
  Panic {
    source: anyhow::Error,
  },

  // --- IO
  ReadFileFailed {
    path: PathBuf,
    source: std::io::Error,
  },
  IoError(std::io::Error),
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::UnresolvedImport { specifier, importer: Some(importer) } => write!(
        f,
        "Could not resolve \"{specifier}\" imported by \"{}\"",
        importer.may_display_relative()
      ),
      ErrorKind::UnresolvedImport { specifier, importer: None } => {
        write!(f, "Could not resolve \"{specifier}\"")
      }
      ErrorKind::InvalidFilter { pattern, reason } => {
        write!(f, "Invalid hook filter /{pattern}/: {reason}")
      }
      ErrorKind::ParseFailed { file, reason } => {
        write!(f, "Parse failed: {}: {reason}", file.may_display_relative())
      }
      ErrorKind::CompilerFailedSilently { file } => write!(
        f,
        "compiler failed silently while transforming \"{}\"",
        file.may_display_relative()
      ),
      ErrorKind::Panic { source } => source.fmt(f),
      ErrorKind::ReadFileFailed { path, source } => {
        write!(f, "Read file failed: {} {source}", path.may_display_relative())
      }
      ErrorKind::IoError(e) => e.fmt(f),
    }
  }
}

impl ErrorKind {
  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::UnresolvedImport { .. } => error_code::UNRESOLVED_IMPORT,
      ErrorKind::InvalidFilter { .. } => error_code::INVALID_FILTER,
      ErrorKind::ParseFailed { .. } => error_code::PARSE_FAILED,
      ErrorKind::CompilerFailedSilently { .. } => error_code::COMPILER_FAILED_SILENTLY,
      ErrorKind::Panic { .. } => error_code::PANIC,
      ErrorKind::ReadFileFailed { .. } => error_code::READ_FILE_FAILED,
      ErrorKind::IoError(_) => error_code::IO_ERROR,
    }
  }
}
