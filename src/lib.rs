// ABOUTME: Root module for toolbelt - result-typed tool adapters for agent runtimes.
// ABOUTME: Re-exports all public types from submodules.

pub mod console;
pub mod error;
pub mod path;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::ToolError;
