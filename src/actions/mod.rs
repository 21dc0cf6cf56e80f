/// GitHub Actions endpoints.
pub mod runs;

pub use runs::fetch_workflow_runs;
