//! CLI command handlers, one per file.

mod env;
mod initials;
mod resolve;

pub use env::run_env;
pub use initials::run_initials;
pub use resolve::run_resolve;
