use std::{
  borrow::Cow,
  path::{Path, PathBuf},
  sync::{Arc, Mutex},
};

use gsolid_common::{Contents, ImportKind, Loader, Namespace};
use gsolid_error::{error_code, format_err};
use gsolid_plugin::{
  BuildOptions, BuildPlugin, HookFilter, HostResolver, JsxMode, LoadArgs, LoadOutput,
  LoadResult, PluginBuild, PluginContext, PluginData, PluginDriver, PluginName, ResolveArgs,
  ResolveOptions, ResolveOutput, ResolvedModule,
};

/// Resolves everything to `/resolved/<specifier>`.
struct EchoResolver;

#[async_trait::async_trait]
impl HostResolver for EchoResolver {
  async fn resolve(
    &self,
    specifier: &str,
    options: ResolveOptions<'_>,
  ) -> gsolid_error::Result<ResolvedModule> {
    if specifier == "explode" {
      return Err(format_err!("host exploded").into());
    }
    Ok(ResolvedModule::new(
      Path::new("/resolved").join(specifier),
      options.namespace,
    ))
  }
}

#[derive(Debug)]
enum Behavior {
  Claim,
  Defer,
  Fail,
}

#[derive(Debug)]
struct TestPlugin {
  name: &'static str,
  filter: &'static str,
  behavior: Behavior,
  seen: Arc<Mutex<Vec<String>>>,
}

impl TestPlugin {
  fn boxed(
    name: &'static str,
    filter: &'static str,
    behavior: Behavior,
    seen: &Arc<Mutex<Vec<String>>>,
  ) -> Box<dyn BuildPlugin> {
    Box::new(Self {
      name,
      filter,
      behavior,
      seen: seen.clone(),
    })
  }
}

#[async_trait::async_trait]
impl BuildPlugin for TestPlugin {
  fn name(&self) -> PluginName {
    Cow::Borrowed(self.name)
  }

  fn setup(&self, build: &mut PluginBuild) -> gsolid_error::Result<()> {
    build.initial_options.jsx.get_or_insert(JsxMode::Transform);
    build.on_resolve(HookFilter::new(self.filter)?);
    build.on_load(HookFilter::new(self.filter)?.with_namespace(Namespace::SolidJsFile));
    Ok(())
  }

  async fn resolve(&self, _ctx: &PluginContext<'_>, args: &ResolveArgs<'_>) -> ResolveOutput {
    self
      .seen
      .lock()
      .unwrap()
      .push(format!("{}:{}", self.name, args.specifier));
    match self.behavior {
      Behavior::Claim => Ok(Some(ResolvedModule::new(
        format!("/{}/{}", self.name, args.specifier),
        Namespace::SolidJsFile,
      ))),
      Behavior::Defer => Ok(None),
      Behavior::Fail => Err(format_err!("{} failed", self.name).into()),
    }
  }

  async fn load(&self, _ctx: &PluginContext<'_>, args: &LoadArgs<'_>) -> LoadOutput {
    match self.behavior {
      Behavior::Claim => Ok(Some(LoadResult {
        contents: Some(Contents::Text(format!("// {}", args.path.display()))),
        ..Default::default()
      })),
      Behavior::Defer => Ok(None),
      Behavior::Fail => Err(format_err!("{} failed to load", self.name).into()),
    }
  }
}

fn options(cwd: &Path) -> BuildOptions {
  BuildOptions {
    cwd: cwd.to_path_buf(),
    jsx: None,
    jsx_import_source: None,
  }
}

fn request(importer: &Path) -> ResolveOptions<'_> {
  ResolveOptions {
    importer: Some(importer),
    namespace: Namespace::File,
    kind: ImportKind::ImportStatement,
    resolve_dir: None,
    plugin_data: PluginData::default(),
  }
}

#[tokio::test]
async fn first_claiming_hook_wins() {
  let seen = Arc::new(Mutex::new(vec![]));
  let driver = PluginDriver::new(
    options(Path::new("/project")),
    vec![
      TestPlugin::boxed("first", "^a", Behavior::Defer, &seen),
      TestPlugin::boxed("second", "^a", Behavior::Claim, &seen),
      TestPlugin::boxed("third", "^a", Behavior::Claim, &seen),
    ],
    Arc::new(EchoResolver),
  )
  .unwrap();
  assert_eq!(driver.options().jsx, Some(JsxMode::Transform));

  let importer = Path::new("/project/main.js");
  let resolved = driver.resolve("abc", request(importer)).await.unwrap();
  assert_eq!(resolved.path, PathBuf::from("/second/abc"));
  assert_eq!(resolved.namespace, Namespace::SolidJsFile);

  let fallback = driver.resolve("xyz", request(importer)).await.unwrap();
  assert_eq!(fallback.path, PathBuf::from("/resolved/xyz"));
  assert_eq!(fallback.namespace, Namespace::File);

  assert_eq!(*seen.lock().unwrap(), vec!["first:abc", "second:abc"]);
}

#[tokio::test]
async fn hook_errors_become_messages() {
  let seen = Arc::new(Mutex::new(vec![]));
  let driver = PluginDriver::new(
    options(Path::new("/project")),
    vec![TestPlugin::boxed("failing", "^a", Behavior::Fail, &seen)],
    Arc::new(EchoResolver),
  )
  .unwrap();
  let importer = Path::new("/project/src/main.js");

  let resolved = driver.resolve("abc", request(importer)).await.unwrap();
  assert_eq!(resolved.errors.len(), 1);
  assert_eq!(resolved.errors[0].text, "failing failed");
  assert_eq!(resolved.errors[0].location.as_ref().unwrap().file, importer);

  let host_failure = driver.resolve("explode", request(importer)).await.unwrap();
  assert_eq!(host_failure.errors[0].text, "host exploded");

  let loaded = driver
    .load(&LoadArgs {
      path: Path::new("/project/abc.js"),
      namespace: Namespace::SolidJsFile,
      plugin_data: PluginData::default(),
    })
    .await;
  assert!(loaded.contents.is_none());
  assert_eq!(loaded.errors[0].code(), Some(error_code::PANIC));
}

#[tokio::test]
async fn load_falls_back_to_the_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("abc.tsx");
  std::fs::write(&path, "export default 1").unwrap();

  let seen = Arc::new(Mutex::new(vec![]));
  let driver = PluginDriver::new(
    options(dir.path()),
    vec![TestPlugin::boxed("claim", ".*", Behavior::Claim, &seen)],
    Arc::new(EchoResolver),
  )
  .unwrap();

  // The load filter only applies to `solid-js-file`.
  let loaded = driver
    .load(&LoadArgs {
      path: &path,
      namespace: Namespace::File,
      plugin_data: PluginData::default(),
    })
    .await;
  assert_eq!(
    loaded.contents,
    Some(Contents::Bytes(b"export default 1".to_vec()))
  );
  assert_eq!(loaded.loader, Some(Loader::Tsx));
  assert_eq!(loaded.watch_files, vec![path.clone()]);
  assert_eq!(loaded.resolve_dir.as_deref(), Some(dir.path()));

  let claimed = driver
    .load(&LoadArgs {
      path: &path,
      namespace: Namespace::SolidJsFile,
      plugin_data: PluginData::default(),
    })
    .await;
  assert!(claimed.contents.is_some());

  let missing = driver
    .load(&LoadArgs {
      path: &dir.path().join("missing.js"),
      namespace: Namespace::File,
      plugin_data: PluginData::default(),
    })
    .await;
  assert_eq!(missing.errors.len(), 1);
  assert_eq!(missing.errors[0].code(), Some(error_code::READ_FILE_FAILED));
  assert!(missing.errors[0].text.starts_with("Read file failed: missing.js"));
}

#[test]
fn setup_errors_name_the_plugin() {
  let seen = Arc::new(Mutex::new(vec![]));
  let err = PluginDriver::new(
    options(Path::new("/project")),
    vec![TestPlugin::boxed("broken", "(", Behavior::Claim, &seen)],
    Arc::new(EchoResolver),
  )
  .unwrap_err();
  assert_eq!(err.code(), error_code::INVALID_FILTER);
  assert!(err.to_string().contains("Setup plugin: broken"));
}
