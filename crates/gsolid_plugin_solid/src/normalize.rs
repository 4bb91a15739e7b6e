use std::path::Path;

use gsolid_compiler::Compiler;
use gsolid_error::Message;

#[derive(Debug)]
pub struct NormalizedSource {
  /// JavaScript with JSX, followed by an inline source map.
  pub code: String,
  pub warnings: Vec<Message>,
}

/// Strips TypeScript syntax from TSX source, keeping JSX for the markup compiler.
pub fn normalize_tsx(path: &Path, source: String) -> gsolid_error::Result<NormalizedSource> {
  let compiler = Compiler::default();
  let fm = compiler.create_source_file(path.to_path_buf(), source);
  let mut parsed = compiler.parse_tsx(path, fm)?;
  compiler.strip_types(&mut parsed.ast);
  let code = compiler
    .print_with_inline_source_map(&parsed.ast, Some(&parsed.comments))
    .map_err(|e| gsolid_error::Error::from(e).context(format!("Print: {}", path.display())))?;
  Ok(NormalizedSource {
    code,
    warnings: parsed.recovered,
  })
}

/// Reads `path` and normalizes it.
pub async fn load_tsx(path: &Path) -> gsolid_error::Result<NormalizedSource> {
  let source = read_to_string(path).await?;
  normalize_tsx(path, source)
}

pub(crate) async fn read_to_string(path: &Path) -> gsolid_error::Result<String> {
  tokio::fs::read_to_string(path)
    .await
    .map_err(|e| gsolid_error::Error::read_file_failed(path, e))
}
