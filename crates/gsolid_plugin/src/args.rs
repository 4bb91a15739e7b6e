use std::path::Path;

use gsolid_common::{ImportKind, Namespace};

/// Side channel attached to a request by the plugin that issued it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PluginData {
  /// The request was already redirected once and must not be redirected again.
  pub skip_redirect: bool,
}

impl PluginData {
  pub fn skip_redirect() -> Self {
    Self {
      skip_redirect: true,
    }
  }
}

#[derive(Debug, Clone)]
pub struct ResolveArgs<'a> {
  pub specifier: &'a str,
  pub importer: Option<&'a Path>,
  /// Namespace of the importer.
  pub namespace: Namespace,
  pub kind: ImportKind,
  pub resolve_dir: Option<&'a Path>,
  pub plugin_data: PluginData,
}

/// Options of a nested resolution issued through [crate::PluginContext::resolve].
#[derive(Debug, Clone)]
pub struct ResolveOptions<'a> {
  pub importer: Option<&'a Path>,
  /// Namespace the request is considered to come from.
  pub namespace: Namespace,
  pub kind: ImportKind,
  pub resolve_dir: Option<&'a Path>,
  pub plugin_data: PluginData,
}

impl<'a> ResolveOptions<'a> {
  pub fn to_args(&self, specifier: &'a str) -> ResolveArgs<'a> {
    ResolveArgs {
      specifier,
      importer: self.importer,
      namespace: self.namespace,
      kind: self.kind,
      resolve_dir: self.resolve_dir,
      plugin_data: self.plugin_data,
    }
  }
}

#[derive(Debug, Clone)]
pub struct LoadArgs<'a> {
  pub path: &'a Path,
  pub namespace: Namespace,
  pub plugin_data: PluginData,
}
