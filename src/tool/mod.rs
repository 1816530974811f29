// ABOUTME: Tool module - the execution contract shared by every adapter.
// ABOUTME: Defines the Tool trait, result envelope, definitions, and registry.

mod definition;
mod registry;
mod result;
mod traits;

pub use definition::*;
pub use registry::*;
pub use result::*;
pub use traits::*;
