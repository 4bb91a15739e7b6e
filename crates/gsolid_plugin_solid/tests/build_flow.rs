mod common;

use std::{path::Path, sync::Arc};

use common::{build_options, driver};
use gsolid_common::{ImportKind, Namespace};
use gsolid_plugin::{HostResolver, LoadArgs, PluginData, ResolveOptions};
use gsolid_resolver::Resolver;
use gsolid_test_utils::{FakeCompiler, Fixture};

fn from_runtime<'a>(importer: &'a Path, resolve_dir: Option<&'a Path>) -> ResolveOptions<'a> {
  ResolveOptions {
    importer: Some(importer),
    namespace: Namespace::SolidJsFile,
    kind: ImportKind::ImportStatement,
    resolve_dir,
    plugin_data: PluginData::default(),
  }
}

#[tokio::test]
async fn app_to_runtime_and_back() {
  let fixture = Fixture::with_files(&[
    (
      "node_modules/solid-js/package.json",
      r#"{ "name": "solid-js", "main": "./dist/solid.js" }"#,
    ),
    (
      "node_modules/solid-js/dist/solid.js",
      "export const createSignal = () => {};\n",
    ),
    (
      "node_modules/solid-js/web/package.json",
      r#"{ "main": "./dist/web.js" }"#,
    ),
    (
      "node_modules/solid-js/web/dist/web.js",
      "export * from \"solid-js\";\n",
    ),
    (
      "node_modules/gsolid/web-ponyfill.js",
      "export const queueMicrotask = globalThis.queueMicrotask;\n",
    ),
    (
      "src/App.tsx",
      "import { render } from \"solid-js/web\";\nrender(() => <main />, document.body);\n",
    ),
  ]);
  let driver = driver(
    build_options(fixture.root()),
    Arc::new(FakeCompiler::new()),
    Arc::new(Resolver::with_cwd(fixture.root().to_path_buf())),
  );

  let app = fixture.path("src/App.tsx");
  let web = driver
    .resolve(
      "solid-js/web",
      ResolveOptions {
        importer: Some(&app),
        namespace: Namespace::File,
        kind: ImportKind::ImportStatement,
        resolve_dir: None,
        plugin_data: PluginData::default(),
      },
    )
    .await
    .unwrap();
  assert!(web.errors.is_empty(), "{:?}", web.errors);
  assert_eq!(web.namespace, Namespace::SolidJsFile);
  assert_eq!(web.path, fixture.path("node_modules/solid-js/web/dist/web.js"));

  let loaded = driver
    .load(&LoadArgs {
      path: &web.path,
      namespace: web.namespace,
      plugin_data: PluginData::default(),
    })
    .await;
  let code = loaded.contents.as_ref().unwrap().to_string_lossy().into_owned();
  assert_eq!(
    code,
    "\nimport {queueMicrotask} from \"gsolid/web-ponyfill\"\nexport * from \"solid-js\";\n"
  );

  let shim = driver
    .resolve(
      "gsolid/web-ponyfill",
      from_runtime(&web.path, loaded.resolve_dir.as_deref()),
    )
    .await
    .unwrap();
  assert_eq!(shim.namespace, Namespace::File);
  assert_eq!(shim.path, fixture.path("node_modules/gsolid/web-ponyfill.js"));

  let solid = driver
    .resolve("solid-js", from_runtime(&web.path, loaded.resolve_dir.as_deref()))
    .await
    .unwrap();
  assert_eq!(solid.namespace, Namespace::SolidJsFile);
  assert_eq!(solid.path, fixture.path("node_modules/solid-js/dist/solid.js"));
}
