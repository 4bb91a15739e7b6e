use std::path::Path;

use crate::{BuildOptions, ResolveOptions, ResolvedModule};

/// The host's own resolution, as exposed to plugins.
#[async_trait::async_trait]
pub trait HostResolver: Send + Sync {
  async fn resolve(
    &self,
    specifier: &str,
    options: ResolveOptions<'_>,
  ) -> gsolid_error::Result<ResolvedModule>;
}

/// What a hook can see of the build it runs in.
pub struct PluginContext<'a> {
  host: &'a dyn HostResolver,
  options: &'a BuildOptions,
}

impl<'a> PluginContext<'a> {
  pub fn new(host: &'a dyn HostResolver, options: &'a BuildOptions) -> Self {
    Self { host, options }
  }

  pub fn options(&self) -> &BuildOptions {
    self.options
  }

  pub fn cwd(&self) -> &Path {
    &self.options.cwd
  }

  /// Runs a nested resolution through the host, hooks included.
  pub async fn resolve(
    &self,
    specifier: &str,
    options: ResolveOptions<'_>,
  ) -> gsolid_error::Result<ResolvedModule> {
    self.host.resolve(specifier, options).await
  }
}
