use std::path::Path;

use gsolid_common::Contents;
use gsolid_plugin::LoadResult;

/// `prefix` followed by `original`, nothing in between.
pub fn patch_contents(prefix: &[u8], original: &[u8]) -> Vec<u8> {
  let mut patched = Vec::with_capacity(prefix.len() + original.len());
  patched.extend_from_slice(prefix);
  patched.extend_from_slice(original);
  patched
}

/// Loads a file of the runtime package with `shim_prefix` in front of it.
///
/// Relative imports of the file, the shim import included, resolve from the directory the file
/// really lives in.
pub async fn load_runtime_file(shim_prefix: &[u8], path: &Path) -> gsolid_error::Result<LoadResult> {
  let original = tokio::fs::read(path)
    .await
    .map_err(|e| gsolid_error::Error::read_file_failed(path, e))?;
  Ok(LoadResult {
    contents: Some(Contents::Bytes(patch_contents(shim_prefix, &original))),
    watch_files: vec![path.to_path_buf()],
    resolve_dir: path.parent().map(Path::to_path_buf),
    ..Default::default()
  })
}
