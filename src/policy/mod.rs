mod config;
mod default_policy;
pub mod errors;
mod validation_policy;

pub use config::PolicyConfig;
pub use default_policy::{DefaultPolicy, DEFAULT_COUNTRY};
pub use validation_policy::ValidationPolicy;
