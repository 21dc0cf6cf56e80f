/// GitHub host access: configuration, the REST client, and its errors.
pub mod client;
pub mod config;
pub mod errors;

pub use client::{HttpClient, RestClient};
pub use config::Config;
pub use errors::ApiError;
