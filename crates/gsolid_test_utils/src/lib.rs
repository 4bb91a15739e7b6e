//! Fakes and fixtures shared by the integration tests of the gsolid crates.

mod fake_compiler;
pub use fake_compiler::*;
mod fixture;
pub use fixture::*;
mod memory_resolver;
pub use memory_resolver::*;
