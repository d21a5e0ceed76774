//! UI module for consistent CLI output
//!
//! Uses `cliclack` styled output in interactive terminals with automatic
//! fallback to plain output in CI/non-interactive environments.

mod context;
mod output;

pub use context::UiContext;
pub use output::{intro, key_value, step_info, step_ok, step_ok_detail, step_warn_hint};
