use std::{path::Path, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
  Js,
  Jsx,
  Ts,
  Tsx,
}

impl Loader {
  /// Unknown or missing extensions are treated like JavaScript.
  pub fn from_path(p: &Path) -> Self {
    p.extension()
      .and_then(|ext| ext.to_str())
      .map(Loader::from_str)
      .map(|l| l.unwrap_or(Loader::Js))
      .unwrap_or(Loader::Js)
  }
}

impl FromStr for Loader {
  type Err = gsolid_error::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "js" | "mjs" | "cjs" => Ok(Self::Js),
      "jsx" => Ok(Self::Jsx),
      "ts" | "mts" | "cts" => Ok(Self::Ts),
      "tsx" => Ok(Self::Tsx),
      _ => Err(gsolid_error::Error::panic(format!(
        "Unknown loader value \"{}\"",
        s
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn by_extension() {
    assert_eq!(Loader::from_path(Path::new("src/App.tsx")), Loader::Tsx);
    assert_eq!(Loader::from_path(Path::new("src/App.jsx")), Loader::Jsx);
    assert_eq!(Loader::from_path(Path::new("src/index.css")), Loader::Js);
    assert_eq!(Loader::from_path(Path::new("Makefile")), Loader::Js);
    assert_eq!(Loader::from_path(Path::new("vite.config.mts")), Loader::Ts);
  }
}
