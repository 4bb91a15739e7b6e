use std::{borrow::Cow, sync::Arc};

use derivative::Derivative;
use gsolid_common::{Loader, Namespace};
use gsolid_plugin::{
  BuildOptions, BuildPlugin, HookFilter, JsxMode, LoadArgs, LoadOutput, PluginBuild,
  PluginContext, PluginName, ResolveArgs, ResolveOutput,
};
use tracing::instrument;

use crate::{
  diagnostics, load_runtime_file, load_tsx, normalize::read_to_string, redirect_runtime_root,
  redirect_shim_import, transform_jsx, MarkupCompiler, ResolveIntercept, SolidPluginOptions,
};

/// How a module is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
  /// A file of the runtime package, which only gets the shim prepended.
  PatchRuntimeFile,
  /// A project file with JSX. `typed` ones have their types stripped first.
  CompileMarkup { typed: bool },
}

impl LoadStage {
  pub fn classify(args: &LoadArgs<'_>) -> Option<Self> {
    match args.namespace {
      Namespace::SolidJsFile => Some(Self::PatchRuntimeFile),
      Namespace::File => match Loader::from_path(args.path) {
        Loader::Tsx => Some(Self::CompileMarkup { typed: true }),
        Loader::Jsx => Some(Self::CompileMarkup { typed: false }),
        Loader::Js | Loader::Ts => None,
      },
    }
  }
}

/// Fills in the JSX options the host left unset.
///
/// `jsx_import_source` is only touched when `jsx` was unset too.
pub fn install_jsx_defaults(options: &mut BuildOptions, jsx_import_source: &str) {
  if options.jsx.is_none() {
    options.jsx = Some(JsxMode::Preserve);
    if options.jsx_import_source.is_none() {
      options.jsx_import_source = Some(jsx_import_source.to_string());
    }
  }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct SolidPlugin {
  options: SolidPluginOptions,
  shim_prefix: Vec<u8>,
  #[derivative(Debug = "ignore")]
  compiler: Arc<dyn MarkupCompiler>,
}

impl SolidPlugin {
  pub fn new(compiler: Arc<dyn MarkupCompiler>) -> Self {
    Self::with_options(Default::default(), compiler)
  }

  pub fn with_options(options: SolidPluginOptions, compiler: Arc<dyn MarkupCompiler>) -> Self {
    Self {
      shim_prefix: options.shim_prefix(),
      options,
      compiler,
    }
  }

  pub fn new_boxed(compiler: Arc<dyn MarkupCompiler>) -> Box<dyn BuildPlugin> {
    Box::new(Self::new(compiler))
  }

  async fn load_markup(
    &self,
    ctx: &PluginContext<'_>,
    args: &LoadArgs<'_>,
    typed: bool,
  ) -> LoadOutput {
    let path = args.path;
    let mut normalizer_warnings = vec![];
    let contents = if typed {
      let normalized = load_tsx(path).await?;
      normalizer_warnings = normalized.warnings;
      normalized.code
    } else {
      read_to_string(path).await?
    };

    let transformed = transform_jsx(
      self.compiler.as_ref(),
      &self.options,
      ctx.cwd(),
      path,
      contents,
    )
    .await?;

    Ok(Some(diagnostics::collect(
      path,
      normalizer_warnings,
      transformed,
      args.plugin_data,
    )))
  }
}

#[async_trait::async_trait]
impl BuildPlugin for SolidPlugin {
  fn name(&self) -> PluginName {
    Cow::Borrowed("gsolid")
  }

  fn setup(&self, build: &mut PluginBuild) -> gsolid_error::Result<()> {
    install_jsx_defaults(build.initial_options, &self.options.jsx_import_source);

    build.on_resolve(HookFilter::new(&self.options.runtime_filter())?);
    build.on_resolve(
      HookFilter::new(&self.options.shim_filter())?.with_namespace(Namespace::SolidJsFile),
    );
    build.on_load(HookFilter::new(".*")?.with_namespace(Namespace::SolidJsFile));
    build.on_load(HookFilter::new(r"\.(t|j)sx$")?.with_namespace(Namespace::File));
    Ok(())
  }

  #[instrument(skip_all, fields(specifier = args.specifier, namespace = %args.namespace))]
  async fn resolve(&self, ctx: &PluginContext<'_>, args: &ResolveArgs<'_>) -> ResolveOutput {
    match ResolveIntercept::classify(&self.options, args) {
      Some(ResolveIntercept::RuntimeRoot) => redirect_runtime_root(ctx, args).await,
      Some(ResolveIntercept::ShimImport) => redirect_shim_import(ctx, args).await,
      None => Ok(None),
    }
  }

  #[instrument(skip_all, fields(path = %args.path.display(), namespace = %args.namespace))]
  async fn load(&self, ctx: &PluginContext<'_>, args: &LoadArgs<'_>) -> LoadOutput {
    match LoadStage::classify(args) {
      Some(LoadStage::PatchRuntimeFile) => {
        load_runtime_file(&self.shim_prefix, args.path).await.map(Some)
      }
      Some(LoadStage::CompileMarkup { typed }) => self.load_markup(ctx, args, typed).await,
      None => Ok(None),
    }
  }
}
