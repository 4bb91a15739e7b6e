use std::path::PathBuf;

use gsolid_common::{Contents, Loader, Namespace};
use gsolid_error::Message;

use crate::PluginData;

#[derive(Debug, Clone, Default)]
pub struct ResolvedModule {
  pub path: PathBuf,
  pub namespace: Namespace,
  pub warnings: Vec<Message>,
  pub errors: Vec<Message>,
}

impl ResolvedModule {
  pub fn new(path: impl Into<PathBuf>, namespace: Namespace) -> Self {
    Self {
      path: path.into(),
      namespace,
      ..Default::default()
    }
  }

  /// A failed resolution. `path` is left empty, like esbuild does.
  pub fn failed(namespace: Namespace, error: Message) -> Self {
    Self {
      namespace,
      errors: vec![error],
      ..Default::default()
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct LoadResult {
  /// `None` lets the host fall through to the file on disk.
  pub contents: Option<Contents>,
  pub loader: Option<Loader>,
  pub warnings: Vec<Message>,
  pub errors: Vec<Message>,
  pub watch_files: Vec<PathBuf>,
  pub resolve_dir: Option<PathBuf>,
  pub plugin_data: Option<PluginData>,
}

pub type ResolveOutput = gsolid_error::Result<Option<ResolvedModule>>;
pub type LoadOutput = gsolid_error::Result<Option<LoadResult>>;
