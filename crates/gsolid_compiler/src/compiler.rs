use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use gsolid_error::{Location, Message};
use swc_core::{
  common::{
    chain,
    comments::{Comments, SingleThreadedComments},
    util::take::Take,
    FileName, Mark, SourceFile, SourceMap, Span, Spanned, GLOBALS,
  },
  ecma::{
    ast::{self, EsVersion},
    codegen::{self as swc_ecma_codegen, text_writer::JsWriter},
    parser::{lexer::Lexer, Parser, StringInput, Syntax, TsConfig},
    transforms::{
      base::{fixer::fixer, hygiene::hygiene, resolver},
      typescript::strip,
    },
    visit::FoldWith,
  },
};

const INLINE_SOURCE_MAP_PREFIX: &str = "//# sourceMappingURL=data:application/json;base64,";

pub struct ParsedModule {
  pub ast: ast::Module,
  pub comments: SingleThreadedComments,
  /// Syntax errors the parser recovered from.
  pub recovered: Vec<Message>,
}

#[derive(Default)]
pub struct Compiler {
  pub cm: Arc<SourceMap>,
}

impl Compiler {
  pub fn create_source_file(&self, filename: PathBuf, code: String) -> Arc<SourceFile> {
    self.cm.new_source_file(FileName::Real(filename), code)
  }

  /// Parses TypeScript with JSX enabled. Comments are collected so they survive printing.
  pub fn parse_tsx(&self, path: &Path, fm: Arc<SourceFile>) -> gsolid_error::Result<ParsedModule> {
    let comments = SingleThreadedComments::default();
    let lexer = Lexer::new(
      Syntax::Typescript(TsConfig {
        tsx: true,
        ..Default::default()
      }),
      EsVersion::latest(),
      StringInput::from(fm.as_ref()),
      Some(&comments as &dyn Comments),
    );
    let mut parser = Parser::new_from(lexer);
    let parsed = parser.parse_module();
    let recovered = parser
      .take_errors()
      .into_iter()
      .map(|e| self.message_at(path, e.span(), e.kind().msg()))
      .collect();

    let ast = parsed.map_err(|e| {
      let message = self.message_at(path, e.span(), e.kind().msg());
      gsolid_error::Error::parse_failed(path, message)
    })?;

    Ok(ParsedModule {
      ast,
      comments,
      recovered,
    })
  }

  /// Removes TypeScript-only syntax. JSX is left as is.
  pub fn strip_types(&self, ast: &mut ast::Module) {
    // Marks are only meaningful within this pass, a fresh GLOBALS is enough.
    GLOBALS.set(&Default::default(), || {
      let unresolved_mark = Mark::new();
      let top_level_mark = Mark::new();

      let mut chained = chain!(
        resolver(unresolved_mark, top_level_mark, true),
        strip(top_level_mark),
        // Renames colliding identifiers and clears the marks set by `resolver`.
        hygiene(),
        fixer(None),
      );
      *ast = ast.take().fold_with(&mut chained);
    });
  }

  /// Prints `ast` followed by a `sourceMappingURL` comment embedding the source map.
  pub fn print_with_inline_source_map(
    &self,
    ast: &ast::Module,
    comments: Option<&dyn Comments>,
  ) -> anyhow::Result<String> {
    let mut output = Vec::new();
    let mut mappings = Vec::new();
    {
      let mut emitter = swc_ecma_codegen::Emitter {
        cfg: Default::default(),
        cm: self.cm.clone(),
        comments,
        wr: Box::new(JsWriter::new(
          self.cm.clone(),
          "\n",
          &mut output,
          Some(&mut mappings),
        )),
      };
      emitter.emit_module(ast)?;
    }
    let mut code = String::from_utf8(output)?;

    let mut source_map = Vec::new();
    self
      .cm
      .build_source_map(&mappings)
      .to_writer(&mut source_map)?;

    if !code.ends_with('\n') {
      code.push('\n');
    }
    code.push_str(INLINE_SOURCE_MAP_PREFIX);
    code.push_str(&STANDARD.encode(source_map));
    code.push('\n');
    Ok(code)
  }

  fn message_at(&self, path: &Path, span: Span, text: impl Into<String>) -> Message {
    let loc = self.cm.lookup_char_pos(span.lo);
    Message::new(text).with_location(Location {
      file: path.to_path_buf(),
      line: Some(loc.line),
      column: Some(loc.col.0),
      line_text: None,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inline_source_map_is_appended() {
    let compiler = Compiler::default();
    let path = PathBuf::from("/project/src/value.ts");
    let fm = compiler.create_source_file(path.clone(), "export const value: number = 1;".to_string());
    let mut parsed = compiler.parse_tsx(&path, fm).unwrap();
    compiler.strip_types(&mut parsed.ast);
    let code = compiler
      .print_with_inline_source_map(&parsed.ast, Some(&parsed.comments))
      .unwrap();

    let (body, map) = code.split_once(INLINE_SOURCE_MAP_PREFIX).unwrap();
    assert!(body.contains("export const value = 1;"));
    let decoded = STANDARD.decode(map.trim()).unwrap();
    let decoded = String::from_utf8(decoded).unwrap();
    assert!(decoded.contains("\"mappings\""));
    assert!(decoded.contains("value.ts"));
  }

  #[test]
  fn fatal_syntax_error() {
    let compiler = Compiler::default();
    let path = PathBuf::from("broken.tsx");
    let fm = compiler.create_source_file(path.clone(), "const = <div>;".to_string());
    let err = compiler.parse_tsx(&path, fm).err().unwrap();
    assert_eq!(err.code(), gsolid_error::error_code::PARSE_FAILED);
  }
}
