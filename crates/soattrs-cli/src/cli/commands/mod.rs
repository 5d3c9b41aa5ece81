//! CLI command handlers, one per file.

mod completions;
mod origin;
mod suffix;

pub use completions::run_completions;
pub use origin::run_origin;
pub use suffix::run_suffix;
