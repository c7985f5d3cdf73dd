//! Plugin surface exposed to the host runtime.

mod base;
mod edgetts;

pub use base::{Tool, ToolProvider};
pub use edgetts::EdgeTtsPlugin;
