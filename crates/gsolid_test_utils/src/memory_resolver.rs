use std::{
  path::{Path, PathBuf},
  sync::Mutex,
};

use gsolid_common::{ImportKind, Namespace};
use gsolid_error::Message;
use gsolid_plugin::{HostResolver, PluginData, ResolveOptions, ResolvedModule};
use rustc_hash::FxHashMap;

/// One request seen by [MemoryResolver].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedResolve {
  pub specifier: String,
  pub importer: Option<PathBuf>,
  pub namespace: Namespace,
  pub kind: ImportKind,
  pub resolve_dir: Option<PathBuf>,
  pub plugin_data: PluginData,
}

/// Resolves specifiers from a fixed table and remembers every request.
#[derive(Debug, Default)]
pub struct MemoryResolver {
  modules: FxHashMap<String, PathBuf>,
  warnings: FxHashMap<String, Vec<String>>,
  requests: Mutex<Vec<RecordedResolve>>,
}

impl MemoryResolver {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_module(mut self, specifier: &str, path: impl Into<PathBuf>) -> Self {
    self.modules.insert(specifier.to_string(), path.into());
    self
  }

  /// Resolving `specifier` also reports `text` as a warning.
  pub fn with_warning(mut self, specifier: &str, text: &str) -> Self {
    self
      .warnings
      .entry(specifier.to_string())
      .or_default()
      .push(text.to_string());
    self
  }

  pub fn requests(&self) -> Vec<RecordedResolve> {
    self.requests.lock().unwrap().clone()
  }
}

#[async_trait::async_trait]
impl HostResolver for MemoryResolver {
  async fn resolve(
    &self,
    specifier: &str,
    options: ResolveOptions<'_>,
  ) -> gsolid_error::Result<ResolvedModule> {
    self.requests.lock().unwrap().push(RecordedResolve {
      specifier: specifier.to_string(),
      importer: options.importer.map(Path::to_path_buf),
      namespace: options.namespace,
      kind: options.kind,
      resolve_dir: options.resolve_dir.map(Path::to_path_buf),
      plugin_data: options.plugin_data,
    });

    let warnings = self
      .warnings
      .get(specifier)
      .map(|texts| texts.iter().map(Message::new).collect())
      .unwrap_or_default();
    match self.modules.get(specifier) {
      Some(path) => Ok(ResolvedModule {
        warnings,
        ..ResolvedModule::new(path.clone(), Namespace::File)
      }),
      None => Ok(ResolvedModule {
        warnings,
        ..ResolvedModule::failed(
          Namespace::File,
          Message::from_error(
            gsolid_error::Error::unresolved_import(specifier, options.importer),
            options.importer.unwrap_or_else(|| Path::new(specifier)),
          ),
        )
      }),
    }
  }
}
