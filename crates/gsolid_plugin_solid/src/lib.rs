//! A build plugin that lets a bundler compile Solid JSX/TSX for the `gsolid` runtime.
//!
//! Imports of `solid-js` are resolved as usual, then moved into the
//! [`Namespace::SolidJsFile`](gsolid_common::Namespace::SolidJsFile) namespace. Files loaded from
//! there get a `gsolid/web-ponyfill` import prepended. `.tsx`/`.jsx` project files go through
//! type stripping (for `.tsx`) and then the Solid JSX compiler.

mod diagnostics;
mod markup_compiler;
pub use markup_compiler::*;
mod normalize;
pub use normalize::*;
mod options;
pub use options::*;
mod patch;
pub use patch::*;
mod plugin;
pub use plugin::*;
mod redirect;
pub use redirect::*;
mod transform_jsx;
pub use transform_jsx::*;
