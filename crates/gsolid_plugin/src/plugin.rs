use std::{borrow::Cow, fmt::Debug};

use crate::{LoadArgs, LoadOutput, PluginBuild, PluginContext, ResolveArgs, ResolveOutput};

pub type PluginName<'a> = Cow<'a, str>;

#[async_trait::async_trait]
pub trait BuildPlugin: Debug + Send + Sync {
  fn name(&self) -> PluginName;

  /// Called exactly once, before any hook of any plugin runs.
  fn setup(&self, _build: &mut PluginBuild) -> gsolid_error::Result<()> {
    Ok(())
  }

  async fn resolve(&self, _ctx: &PluginContext<'_>, _args: &ResolveArgs<'_>) -> ResolveOutput {
    Ok(None)
  }

  async fn load(&self, _ctx: &PluginContext<'_>, _args: &LoadArgs<'_>) -> LoadOutput {
    Ok(None)
  }
}
