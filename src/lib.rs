pub mod config;
pub mod error;
pub mod formatter;
pub mod output;
pub mod provider;
pub mod rename;
pub mod ui;
pub mod version_info;

pub use error::{Result, VersionGenError};
