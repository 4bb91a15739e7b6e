use std::path::Path;

use gsolid_common::Namespace;
use gsolid_plugin::{
  PluginContext, PluginData, ResolveArgs, ResolveOptions, ResolveOutput, ResolvedModule,
};

use crate::SolidPluginOptions;

/// The resolve requests this plugin takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveIntercept {
  /// `solid-js` or one of its subpaths, from any namespace.
  RuntimeRoot,
  /// The shim import of a file in the `solid-js-file` namespace.
  ShimImport,
}

impl ResolveIntercept {
  pub fn classify(options: &SolidPluginOptions, args: &ResolveArgs<'_>) -> Option<Self> {
    match args.namespace {
      Namespace::SolidJsFile if args.specifier == options.shim_specifier => Some(Self::ShimImport),
      Namespace::File | Namespace::SolidJsFile => options
        .is_runtime_specifier(args.specifier)
        .then_some(Self::RuntimeRoot),
    }
  }
}

/// Resolves the specifier as usual, then moves the result into `solid-js-file`.
pub async fn redirect_runtime_root(ctx: &PluginContext<'_>, args: &ResolveArgs<'_>) -> ResolveOutput {
  // Set on the nested request below, so it reaches the default resolution instead of coming
  // back here.
  if args.plugin_data.skip_redirect {
    return Ok(None);
  }
  let resolve_dir = args.resolve_dir.or_else(|| args.importer.and_then(Path::parent));
  let resolved = ctx
    .resolve(
      args.specifier,
      ResolveOptions {
        importer: args.importer,
        namespace: Namespace::File,
        kind: args.kind,
        resolve_dir,
        plugin_data: PluginData::skip_redirect(),
      },
    )
    .await?;
  tracing::debug!(specifier = args.specifier, path = %resolved.path.display(), "redirected into solid-js-file");
  Ok(Some(ResolvedModule {
    path: resolved.path,
    namespace: Namespace::SolidJsFile,
    warnings: resolved.warnings,
    errors: resolved.errors,
  }))
}

/// Resolves the shim import of a runtime file from the build's working directory.
///
/// Files in `solid-js-file` are not where the project expects them to be, so the shim has to be
/// looked up from the project itself.
pub async fn redirect_shim_import(ctx: &PluginContext<'_>, args: &ResolveArgs<'_>) -> ResolveOutput {
  if args.plugin_data.skip_redirect {
    return Ok(None);
  }
  let resolved = ctx
    .resolve(
      args.specifier,
      ResolveOptions {
        importer: args.importer,
        namespace: Namespace::File,
        kind: args.kind,
        resolve_dir: Some(ctx.cwd()),
        plugin_data: PluginData::skip_redirect(),
      },
    )
    .await?;
  Ok(Some(ResolvedModule {
    path: resolved.path,
    namespace: Namespace::File,
    warnings: resolved.warnings,
    errors: resolved.errors,
  }))
}
