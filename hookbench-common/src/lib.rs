//! # hookbench common
//!
//! Small building blocks shared by the hookbench crates:
//!
//! - [`process`] - blocking child-process execution with captured output
//! - [`locator`] - executable lookup on the ambient or an explicit search path
//!
//! External tools (`git`, the hook runner) are only ever observed through their
//! exit code and raw text output, so [`CommandOutput`] is the one currency passed
//! between crates.

pub mod locator;
pub mod process;

pub use locator::ToolLocator;
pub use process::{capture, describe, CommandOutput};
