pub mod config;
pub mod layout;
pub mod logging;
pub mod util;

pub use config::{job_config, JobConfiguration};
pub use layout::Granularity;
