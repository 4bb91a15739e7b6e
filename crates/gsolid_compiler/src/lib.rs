mod compiler;
pub use compiler::*;

pub use swc_core::common::comments::{Comments, SingleThreadedComments};
