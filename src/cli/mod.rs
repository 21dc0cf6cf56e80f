/// CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{OutputCtx, Stdout, write_error};
