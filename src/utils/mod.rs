pub mod config;
pub mod error;

pub use config::ScanConfig;
pub use error::ScanError;
