mod loader;
pub use loader::*;
mod namespace;
pub use namespace::*;
mod import_kind;
pub use import_kind::*;
mod contents;
pub use contents::*;
