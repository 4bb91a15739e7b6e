/// How a specifier was referenced by its importer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImportKind {
  EntryPoint,
  #[default]
  ImportStatement,
  RequireCall,
  DynamicImport,
  RequireResolve,
  ImportRule,
  UrlToken,
}
