/// Repository layer: identity, parsing, and ambient discovery.
pub mod context;
pub mod errors;
pub mod repository;
pub mod resolve;

pub use context::{GitContext, RepoContext};
pub use errors::RepoError;
pub use repository::{DEFAULT_HOST, Repository};
pub use resolve::resolve;
