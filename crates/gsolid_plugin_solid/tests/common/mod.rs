use std::{path::Path, sync::Arc};

use gsolid_plugin::{BuildOptions, HostResolver, PluginDriver};
use gsolid_plugin_solid::SolidPlugin;
use gsolid_test_utils::FakeCompiler;

pub fn build_options(cwd: &Path) -> BuildOptions {
  BuildOptions {
    cwd: cwd.to_path_buf(),
    jsx: None,
    jsx_import_source: None,
  }
}

/// A driver running only the gsolid plugin, on top of `fallback`.
pub fn driver(
  options: BuildOptions,
  compiler: Arc<FakeCompiler>,
  fallback: Arc<dyn HostResolver>,
) -> PluginDriver {
  gsolid_tracing::enable_tracing_on_demand();
  PluginDriver::new(options, vec![SolidPlugin::new_boxed(compiler)], fallback).unwrap()
}
