//! Diagnostic infrastructure for the hookbench harness
//!
//! Prerequisite checks are recorded as [`Check`] values by a type implementing
//! [`DoctorRunner`], then summarised or rendered as a table.
//!
//! # Example
//!
//! ```
//! use hookbench_doctor::{Check, DoctorRunner};
//!
//! struct Prerequisites {
//!     checks: Vec<Check>,
//! }
//!
//! impl DoctorRunner for Prerequisites {
//!     fn checks(&self) -> &[Check] {
//!         &self.checks
//!     }
//!
//!     fn checks_mut(&mut self) -> &mut Vec<Check> {
//!         &mut self.checks
//!     }
//! }
//!
//! let mut prerequisites = Prerequisites { checks: Vec::new() };
//! prerequisites.add_check(Check::ok("lefthook", "Required", "Found at /usr/bin/lefthook"));
//! prerequisites.add_check(Check::warning("shfmt", "Shell", "Not found on PATH", "Install shfmt"));
//!
//! assert_eq!(prerequisites.summary(), "1 passed, 1 warning, 0 errors");
//! ```

mod display;
mod runner;
mod table;
mod types;

pub use display::{format_check_status, CheckRow, NO_FIX};
pub use runner::DoctorRunner;
pub use table::{new_table, render_checks_table};
pub use types::{Check, CheckStatus};
