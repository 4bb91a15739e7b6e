use std::path::PathBuf;

use gsolid_common::Namespace;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsxMode {
  Transform,
  Preserve,
  Automatic,
}

/// The host's initial build options.
///
/// Plugins may only touch them from [crate::BuildPlugin::setup].
#[derive(Debug, Clone)]
pub struct BuildOptions {
  pub cwd: PathBuf,
  /// `None` means unset, the host picks its own default.
  pub jsx: Option<JsxMode>,
  pub jsx_import_source: Option<String>,
}

impl Default for BuildOptions {
  fn default() -> Self {
    Self {
      cwd: std::env::current_dir().unwrap_or_default(),
      jsx: None,
      jsx_import_source: None,
    }
  }
}

/// Decides which requests a hook is called for.
///
/// `filter` is matched against the specifier (resolve) or the path (load). `namespace` is the
/// namespace of the importer (resolve) or of the module (load); `None` means any namespace.
#[derive(Debug, Clone)]
pub struct HookFilter {
  pub filter: Regex,
  pub namespace: Option<Namespace>,
}

impl HookFilter {
  pub fn new(pattern: &str) -> gsolid_error::Result<Self> {
    let filter =
      Regex::new(pattern).map_err(|e| gsolid_error::Error::invalid_filter(pattern, e))?;
    Ok(Self {
      filter,
      namespace: None,
    })
  }

  pub fn with_namespace(mut self, namespace: Namespace) -> Self {
    self.namespace = Some(namespace);
    self
  }

  pub fn matches(&self, subject: &str, namespace: Namespace) -> bool {
    self.namespace.map_or(true, |ns| ns == namespace) && self.filter.is_match(subject)
  }
}

/// Handed to [crate::BuildPlugin::setup].
#[derive(Debug)]
pub struct PluginBuild<'a> {
  pub initial_options: &'a mut BuildOptions,
  pub(crate) resolve_filters: Vec<HookFilter>,
  pub(crate) load_filters: Vec<HookFilter>,
}

impl<'a> PluginBuild<'a> {
  pub fn new(initial_options: &'a mut BuildOptions) -> Self {
    Self {
      initial_options,
      resolve_filters: vec![],
      load_filters: vec![],
    }
  }

  pub fn on_resolve(&mut self, filter: HookFilter) {
    self.resolve_filters.push(filter);
  }

  pub fn on_load(&mut self, filter: HookFilter) {
    self.load_filters.push(filter);
  }
}
