use std::fmt::Display;

/// Logical namespace a resolved module lives in.
///
/// `SolidJsFile` keeps the files of `solid-js` itself apart from ordinary project files, so
/// they can be patched on load without touching generic file handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Namespace {
  #[default]
  File,
  SolidJsFile,
}

impl Namespace {
  pub fn as_str(&self) -> &'static str {
    match self {
      Namespace::File => "file",
      Namespace::SolidJsFile => "solid-js-file",
    }
  }
}

impl Display for Namespace {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
