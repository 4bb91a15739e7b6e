use std::path::{Path, PathBuf};

use gsolid_error::Message;

/// What the compiled code is meant to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
  Dom,
  Ssr,
  /// Does not assume a renderer; suits custom renderers.
  Universal,
}

/// Options of the Solid JSX preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidPreset {
  /// Module the element helpers are imported from.
  pub module_name: String,
  pub generate: GenerateMode,
}

/// Identifies who is calling the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
  pub name: String,
  pub supports_static_esm: bool,
}

/// Asks the compiler for the options of one file.
#[derive(Debug, Clone)]
pub struct LoadOptionsRequest<'a> {
  pub filename: &'a Path,
  /// Applied on top of whatever project configuration matches `filename`.
  pub preset: SolidPreset,
  pub caller: CallerInfo,
}

/// Fully resolved compiler options for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
  pub filename: PathBuf,
  pub presets: Vec<SolidPreset>,
  pub caller: Option<CallerInfo>,
  pub source_maps: bool,
  /// Name recorded as the source in emitted maps.
  pub source_file_name: Option<String>,
}

impl CompilerOptions {
  /// Options with nothing but the request itself applied.
  pub fn from_request(request: &LoadOptionsRequest<'_>) -> Self {
    Self {
      filename: request.filename.to_path_buf(),
      presets: vec![request.preset.clone()],
      caller: Some(request.caller.clone()),
      source_maps: false,
      source_file_name: None,
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct CompiledSource {
  pub code: Option<String>,
  pub warnings: Vec<Message>,
}

/// The JSX to function call compiler, as seen by the plugin.
#[async_trait::async_trait]
pub trait MarkupCompiler: Send + Sync {
  /// Project options for `request.filename` merged with the request.
  ///
  /// `None` means the project configuration excludes this file.
  fn load_options(
    &self,
    request: LoadOptionsRequest<'_>,
  ) -> gsolid_error::Result<Option<CompilerOptions>>;

  /// `Ok(None)` means the compiler produced nothing without saying why.
  async fn transform(
    &self,
    source: &str,
    options: &CompilerOptions,
  ) -> gsolid_error::Result<Option<CompiledSource>>;
}
