use serde::Deserialize;

use crate::{CallerInfo, GenerateMode, SolidPreset};

fn runtime_package_default() -> String {
  "solid-js".to_string()
}

fn shim_specifier_default() -> String {
  "gsolid/web-ponyfill".to_string()
}

fn jsx_runtime_module_default() -> String {
  "gsolid/jsx-runtime".to_string()
}

fn jsx_import_source_default() -> String {
  "gsolid".to_string()
}

fn caller_name_default() -> String {
  "esbuild-plugin-gsolid".to_string()
}

/// Names the plugin works with. The defaults are what `gsolid` ships with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolidPluginOptions {
  /// Package whose imports are moved into the `solid-js-file` namespace.
  #[serde(default = "runtime_package_default")]
  pub runtime_package: String,
  /// Module imported at the top of every file of `runtime_package`.
  #[serde(default = "shim_specifier_default")]
  pub shim_specifier: String,
  /// Where compiled JSX imports its element helpers from.
  #[serde(default = "jsx_runtime_module_default")]
  pub jsx_runtime_module: String,
  /// Written to the host's `jsx_import_source` when the host left JSX handling unset.
  #[serde(default = "jsx_import_source_default")]
  pub jsx_import_source: String,
  #[serde(default = "caller_name_default")]
  pub caller_name: String,
}

impl Default for SolidPluginOptions {
  fn default() -> Self {
    Self {
      runtime_package: runtime_package_default(),
      shim_specifier: shim_specifier_default(),
      jsx_runtime_module: jsx_runtime_module_default(),
      jsx_import_source: jsx_import_source_default(),
      caller_name: caller_name_default(),
    }
  }
}

impl SolidPluginOptions {
  /// The bytes put in front of every file of the runtime package.
  pub fn shim_prefix(&self) -> Vec<u8> {
    format!(
      "\nimport {{queueMicrotask}} from \"{}\"\n",
      self.shim_specifier
    )
    .into_bytes()
  }

  pub fn preset(&self) -> SolidPreset {
    SolidPreset {
      module_name: self.jsx_runtime_module.clone(),
      generate: GenerateMode::Universal,
    }
  }

  pub fn caller(&self) -> CallerInfo {
    CallerInfo {
      name: self.caller_name.clone(),
      supports_static_esm: true,
    }
  }

  /// `true` for the package itself and any of its subpaths.
  pub fn is_runtime_specifier(&self, specifier: &str) -> bool {
    specifier
      .strip_prefix(self.runtime_package.as_str())
      .map_or(false, |rest| rest.is_empty() || rest.starts_with('/'))
  }

  pub(crate) fn runtime_filter(&self) -> String {
    format!("^{}(/|$)", regex::escape(&self.runtime_package))
  }

  pub(crate) fn shim_filter(&self) -> String {
    format!("^{}$", regex::escape(&self.shim_specifier))
  }
}
