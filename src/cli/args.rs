/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// gh-runs — list GitHub Actions workflow runs.
#[derive(Debug, Parser)]
#[command(
    name = "gh-runs",
    about = "List GitHub Actions workflow runs for a repository",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print results (and errors) as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log resolution and HTTP details to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the most recent workflow runs of a repository.
    List(ListArgs),
}

/// Arguments for `gh-runs list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Select another repository using the [HOST/]OWNER/REPO format.
    /// Defaults to GH_REPO or the current directory's git remote.
    #[arg(short = 'R', long, value_name = "[HOST/]OWNER/REPO", default_value = "")]
    pub repo: String,

    /// Maximum number of workflow runs to fetch.
    #[arg(
        short = 'L',
        long,
        value_name = "N",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: u32,

    /// Positional arguments are not accepted; collected so the count can be reported.
    #[arg(hide = true)]
    pub args: Vec<String>,
}
