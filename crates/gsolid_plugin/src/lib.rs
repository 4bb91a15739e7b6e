mod args;
pub use args::*;
mod build;
pub use build::*;
mod context;
pub use context::*;
mod output;
pub use output::*;
mod plugin;
pub use plugin::*;
mod plugin_driver;
pub use plugin_driver::*;

pub use async_trait;
