use std::path::Path;

use gsolid_common::{Contents, Loader};
use gsolid_error::Message;
use gsolid_plugin::{LoadResult, PluginData};

use crate::TransformResult;

/// Turns the stage outputs of one `.tsx`/`.jsx` load into what the host expects.
///
/// Warnings of the normalizer come before the ones of the compiler. `path` is always the only
/// watch file.
pub(crate) fn collect(
  path: &Path,
  normalizer_warnings: Vec<Message>,
  transformed: TransformResult,
  plugin_data: PluginData,
) -> LoadResult {
  let TransformResult {
    code,
    compiled,
    warnings: compiler_warnings,
    errors,
  } = transformed;

  let mut warnings = normalizer_warnings;
  warnings.extend(compiler_warnings);

  LoadResult {
    loader: compiled.then_some(Loader::Js),
    contents: code.map(Contents::Text),
    warnings,
    errors,
    watch_files: vec![path.to_path_buf()],
    resolve_dir: None,
    plugin_data: Some(plugin_data),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn warnings_keep_stage_order() {
    let transformed = TransformResult {
      code: Some("export default 1".to_string()),
      compiled: true,
      warnings: vec![Message::new("from compiler")],
      ..Default::default()
    };
    let result = collect(
      Path::new("/project/App.tsx"),
      vec![Message::new("from normalizer")],
      transformed,
      PluginData::default(),
    );

    let texts = result
      .warnings
      .iter()
      .map(|w| w.text.as_str())
      .collect::<Vec<_>>();
    assert_eq!(texts, vec!["from normalizer", "from compiler"]);
    assert_eq!(result.watch_files, vec![Path::new("/project/App.tsx").to_path_buf()]);
    assert_eq!(result.loader, Some(Loader::Js));
  }

  #[test]
  fn untouched_markup_has_no_loader_hint() {
    let transformed = TransformResult {
      code: Some("export const C = () => <p/>;".to_string()),
      compiled: false,
      ..Default::default()
    };
    let result = collect(Path::new("C.jsx"), vec![], transformed, PluginData::default());
    assert_eq!(
      result.contents,
      Some(Contents::Text("export const C = () => <p/>;".to_string()))
    );
    assert_eq!(result.loader, None);
  }

  #[test]
  fn failed_compilation_has_no_contents() {
    let transformed = TransformResult {
      errors: vec![Message::new("boom")],
      ..Default::default()
    };
    let result = collect(Path::new("App.jsx"), vec![], transformed, PluginData::default());
    assert!(result.contents.is_none());
    assert!(result.loader.is_none());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.watch_files.len(), 1);
  }
}
