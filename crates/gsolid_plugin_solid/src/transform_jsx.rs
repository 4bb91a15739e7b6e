use std::path::Path;

use gsolid_error::Message;
use sugar_path::SugarPath;
use tracing::instrument;

use crate::{CompiledSource, LoadOptionsRequest, MarkupCompiler, SolidPluginOptions};

/// Outcome of one markup compilation.
#[derive(Debug, Default)]
pub struct TransformResult {
  /// `None` when the compiler failed; see `errors`.
  pub code: Option<String>,
  /// `false` when the file was passed through untouched.
  pub compiled: bool,
  pub warnings: Vec<Message>,
  pub errors: Vec<Message>,
}

impl TransformResult {
  fn pass_through(contents: String) -> Self {
    Self {
      code: Some(contents),
      ..Default::default()
    }
  }

  fn failed(error: Message) -> Self {
    Self {
      errors: vec![error],
      ..Default::default()
    }
  }
}

/// Compiles Solid JSX in `contents` into calls to the `gsolid` runtime.
///
/// Calls the compiler exactly once. Failures end up in `errors`, tagged with `path`; only a
/// failure to load the compiler options is returned as `Err`.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn transform_jsx(
  compiler: &dyn MarkupCompiler,
  options: &SolidPluginOptions,
  cwd: &Path,
  path: &Path,
  contents: String,
) -> gsolid_error::Result<TransformResult> {
  let request = LoadOptionsRequest {
    filename: path,
    preset: options.preset(),
    caller: options.caller(),
  };
  let Some(mut compiler_options) = compiler.load_options(request)? else {
    tracing::debug!("no compiler options, file is ignored");
    return Ok(TransformResult::pass_through(contents));
  };

  if compiler_options.source_maps {
    compiler_options.source_file_name = Some(path.relative(cwd).to_string_lossy().into_owned());
  }

  let readable = |error: gsolid_error::Error| {
    gsolid_error::CWD.set(&cwd.to_path_buf(), || Message::from_error(error, path))
  };

  let result = match compiler.transform(&contents, &compiler_options).await {
    Ok(Some(CompiledSource { code, warnings })) => match code.filter(|code| !code.is_empty()) {
      Some(code) => TransformResult {
        code: Some(code),
        compiled: true,
        warnings,
        errors: vec![],
      },
      // Nothing came back, the input still holds markup and stays as it is.
      None => TransformResult {
        warnings,
        ..TransformResult::pass_through(contents)
      },
    },
    Ok(None) => TransformResult::failed(readable(
      gsolid_error::Error::compiler_failed_silently(path),
    )),
    Err(err) => TransformResult::failed(readable(err)),
  };
  Ok(result)
}
