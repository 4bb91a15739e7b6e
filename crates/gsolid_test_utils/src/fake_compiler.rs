use std::{path::Path, sync::Mutex, time::Duration};

use gsolid_error::Message;
use gsolid_plugin_solid::{CompiledSource, CompilerOptions, LoadOptionsRequest, MarkupCompiler};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// How [FakeCompiler] behaves, keyed by file name where it matters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FakeCompilerConfig {
  /// File names the project configuration excludes.
  #[serde(default)]
  pub ignore: Vec<String>,
  /// File names whose compilation fails with the given message.
  #[serde(default)]
  pub throw: FxHashMap<String, String>,
  /// File names for which the compiler returns nothing.
  #[serde(default)]
  pub silent: Vec<String>,
  /// File names for which the compiler answers with empty code.
  #[serde(default)]
  pub empty_code: Vec<String>,
  /// File names for which the compiler answers without any code.
  #[serde(default)]
  pub no_code: Vec<String>,
  /// File names whose compilation takes this many milliseconds.
  #[serde(default)]
  pub delay_ms: FxHashMap<String, u64>,
  #[serde(default)]
  pub warnings: Vec<String>,
  #[serde(default)]
  pub source_maps: bool,
}

impl FakeCompilerConfig {
  pub fn from_json(json: &str) -> Self {
    serde_json::from_str(json).unwrap()
  }
}

/// Stands in for the Solid JSX compiler.
///
/// Compiled code is the source behind an import of the preset's runtime module, which keeps the
/// input recognizable in assertions.
#[derive(Debug, Default)]
pub struct FakeCompiler {
  config: FakeCompilerConfig,
  /// What `load_options` was asked for, as options with only the request applied.
  requests: Mutex<Vec<CompilerOptions>>,
  calls: Mutex<Vec<CompilerOptions>>,
}

impl FakeCompiler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: FakeCompilerConfig) -> Self {
    Self {
      config,
      ..Default::default()
    }
  }

  /// Options of every `transform` call, in call order.
  pub fn calls(&self) -> Vec<CompilerOptions> {
    self.calls.lock().unwrap().clone()
  }

  pub fn requests(&self) -> Vec<CompilerOptions> {
    self.requests.lock().unwrap().clone()
  }

  fn file_name(path: &Path) -> String {
    path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default()
  }
}

#[async_trait::async_trait]
impl MarkupCompiler for FakeCompiler {
  fn load_options(
    &self,
    request: LoadOptionsRequest<'_>,
  ) -> gsolid_error::Result<Option<CompilerOptions>> {
    let mut options = CompilerOptions::from_request(&request);
    self.requests.lock().unwrap().push(options.clone());
    options.source_maps = self.config.source_maps;
    if self
      .config
      .ignore
      .contains(&Self::file_name(&options.filename))
    {
      return Ok(None);
    }
    Ok(Some(options))
  }

  async fn transform(
    &self,
    source: &str,
    options: &CompilerOptions,
  ) -> gsolid_error::Result<Option<CompiledSource>> {
    self.calls.lock().unwrap().push(options.clone());
    let file_name = Self::file_name(&options.filename);
    if let Some(ms) = self.config.delay_ms.get(&file_name) {
      tokio::time::sleep(Duration::from_millis(*ms)).await;
    }
    if let Some(reason) = self.config.throw.get(&file_name) {
      return Err(gsolid_error::format_err!("{}", reason).into());
    }
    if self.config.silent.contains(&file_name) {
      return Ok(None);
    }

    let warnings = self.config.warnings.iter().map(Message::new).collect();
    if self.config.empty_code.contains(&file_name) {
      return Ok(Some(CompiledSource {
        code: Some(String::new()),
        warnings,
      }));
    }
    if self.config.no_code.contains(&file_name) {
      return Ok(Some(CompiledSource {
        code: None,
        warnings,
      }));
    }

    let module_name = options
      .presets
      .first()
      .map(|preset| preset.module_name.as_str())
      .unwrap_or_default();
    Ok(Some(CompiledSource {
      code: Some(format!(
        "import {{ createElement }} from \"{}\";\n{}",
        module_name, source
      )),
      warnings,
    }))
  }
}
