use std::path::{Path, PathBuf};

use derivative::Derivative;
use gsolid_common::Namespace;
use gsolid_error::Message;
use gsolid_plugin::{HostResolver, ResolveOptions, ResolvedModule};
use nodejs_resolver::{ResolveResult, Resolver as NodeResolver};
use sugar_path::SugarPath;

/// Default resolution, the way Node resolves imports of ES modules.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct Resolver {
  cwd: PathBuf,
  #[derivative(Debug = "ignore")]
  inner: NodeResolver,
}

impl Resolver {
  pub fn with_cwd(cwd: PathBuf) -> Self {
    let inner = NodeResolver::new(nodejs_resolver::Options {
      extensions: vec![
        ".js".to_string(),
        ".jsx".to_string(),
        ".ts".to_string(),
        ".tsx".to_string(),
      ],
      main_fields: vec!["module".to_string(), "main".to_string()],
      condition_names: ["import", "module", "default"]
        .into_iter()
        .map(String::from)
        .collect(),
      ..Default::default()
    });
    Self { cwd, inner }
  }

  /// `None` if nothing on disk matches. Relative `resolve_dir`s are taken from `cwd`.
  pub fn resolve_path(&self, resolve_dir: Option<&Path>, specifier: &str) -> Option<PathBuf> {
    let base = match resolve_dir {
      Some(dir) if dir.is_absolute() => dir.normalize(),
      Some(dir) => self.cwd.join(dir).normalize(),
      None => self.cwd.clone(),
    };
    match self.inner.resolve(&base, specifier) {
      Ok(ResolveResult::Resource(resource)) => Some(resource.path),
      Ok(ResolveResult::Ignored) => None,
      Err(err) => {
        tracing::trace!(specifier, base = %base.display(), ?err, "not resolved");
        None
      }
    }
  }
}

impl Default for Resolver {
  fn default() -> Self {
    Self::with_cwd(std::env::current_dir().unwrap_or_default())
  }
}

#[async_trait::async_trait]
impl HostResolver for Resolver {
  async fn resolve(
    &self,
    specifier: &str,
    options: ResolveOptions<'_>,
  ) -> gsolid_error::Result<ResolvedModule> {
    let resolve_dir = options
      .resolve_dir
      .or_else(|| options.importer.and_then(Path::parent));

    match self.resolve_path(resolve_dir, specifier) {
      Some(path) => {
        tracing::trace!(specifier, path = %path.display(), "resolved");
        Ok(ResolvedModule::new(path, Namespace::File))
      }
      None => {
        let location = options.importer.unwrap_or(self.cwd.as_path());
        let message = gsolid_error::CWD.set(&self.cwd, || {
          Message::from_error(
            gsolid_error::Error::unresolved_import(specifier, options.importer),
            location,
          )
        });
        Ok(ResolvedModule::failed(options.namespace, message))
      }
    }
  }
}
