use std::{path::Path, sync::Arc};

use derivative::Derivative;
use gsolid_common::{Contents, Loader};
use gsolid_error::Message;
use tracing::instrument;

use crate::{
  BuildOptions, BuildPlugin, HookFilter, HostResolver, LoadArgs, LoadResult, PluginBuild,
  PluginContext, ResolveOptions, ResolvedModule,
};

#[derive(Debug)]
struct RegisteredPlugin {
  plugin: Box<dyn BuildPlugin>,
  resolve_filters: Vec<HookFilter>,
  load_filters: Vec<HookFilter>,
}

/// Calls plugin hooks the way the host does.
///
/// Options are final once `new` returns, so hooks can run concurrently without locking.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct PluginDriver {
  plugins: Vec<RegisteredPlugin>,
  options: BuildOptions,
  /// The host's default resolution, used when no hook claims a request.
  #[derivative(Debug = "ignore")]
  fallback: Arc<dyn HostResolver>,
}

impl PluginDriver {
  /// Runs `setup` of every plugin, in order.
  pub fn new(
    mut options: BuildOptions,
    plugins: Vec<Box<dyn BuildPlugin>>,
    fallback: Arc<dyn HostResolver>,
  ) -> gsolid_error::Result<Self> {
    let plugins = plugins
      .into_iter()
      .map(|plugin| -> gsolid_error::Result<RegisteredPlugin> {
        let mut build = PluginBuild::new(&mut options);
        plugin
          .setup(&mut build)
          .map_err(|e| e.context(format!("Setup plugin: {}", plugin.name())))?;
        tracing::debug!(
          plugin = %plugin.name(),
          resolve_hooks = build.resolve_filters.len(),
          load_hooks = build.load_filters.len(),
          "plugin registered"
        );
        let PluginBuild {
          resolve_filters,
          load_filters,
          ..
        } = build;
        Ok(RegisteredPlugin {
          plugin,
          resolve_filters,
          load_filters,
        })
      })
      .collect::<gsolid_error::Result<Vec<_>>>()?;

    Ok(Self {
      plugins,
      options,
      fallback,
    })
  }

  pub fn options(&self) -> &BuildOptions {
    &self.options
  }

  /// First hook returning a result wins. Without one, the file is read from disk as is.
  #[instrument(skip_all, fields(path = %args.path.display(), namespace = %args.namespace))]
  pub async fn load(&self, args: &LoadArgs<'_>) -> LoadResult {
    let ctx = PluginContext::new(self, &self.options);
    let subject = args.path.to_string_lossy();
    for registered in &self.plugins {
      if !registered
        .load_filters
        .iter()
        .any(|filter| filter.matches(&subject, args.namespace))
      {
        continue;
      }
      match registered.plugin.load(&ctx, args).await {
        Ok(Some(result)) => return result,
        Ok(None) => {}
        Err(err) => {
          tracing::debug!(plugin = %registered.plugin.name(), "load hook failed");
          return LoadResult {
            errors: vec![self.message_from_error(err, args.path)],
            ..Default::default()
          };
        }
      }
    }

    match tokio::fs::read(args.path).await {
      Ok(bytes) => LoadResult {
        contents: Some(Contents::Bytes(bytes)),
        loader: Some(Loader::from_path(args.path)),
        watch_files: vec![args.path.to_path_buf()],
        resolve_dir: args.path.parent().map(Path::to_path_buf),
        ..Default::default()
      },
      Err(e) => LoadResult {
        errors: vec![self.message_from_error(
          gsolid_error::Error::read_file_failed(args.path, e),
          args.path,
        )],
        ..Default::default()
      },
    }
  }

  fn message_from_error(&self, err: gsolid_error::Error, file: &Path) -> Message {
    gsolid_error::CWD.set(&self.options.cwd, || Message::from_error(err, file))
  }
}

#[async_trait::async_trait]
impl HostResolver for PluginDriver {
  #[instrument(skip_all, fields(specifier = %specifier, namespace = %options.namespace))]
  async fn resolve(
    &self,
    specifier: &str,
    options: ResolveOptions<'_>,
  ) -> gsolid_error::Result<ResolvedModule> {
    let ctx = PluginContext::new(self, &self.options);
    let args = options.to_args(specifier);
    let location = options.importer.unwrap_or_else(|| Path::new(specifier));
    for registered in &self.plugins {
      if !registered
        .resolve_filters
        .iter()
        .any(|filter| filter.matches(specifier, args.namespace))
      {
        continue;
      }
      match registered.plugin.resolve(&ctx, &args).await {
        Ok(Some(resolved)) => {
          tracing::trace!(plugin = %registered.plugin.name(), path = %resolved.path.display(), "resolved by plugin");
          return Ok(resolved);
        }
        Ok(None) => {}
        Err(err) => {
          return Ok(ResolvedModule::failed(
            args.namespace,
            self.message_from_error(err, location),
          ))
        }
      }
    }

    let namespace = args.namespace;
    match self.fallback.resolve(specifier, options).await {
      Ok(resolved) => Ok(resolved),
      Err(err) => Ok(ResolvedModule::failed(
        namespace,
        self.message_from_error(err, location),
      )),
    }
  }
}
