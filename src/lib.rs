pub mod config;
pub mod conventional;
pub mod descriptor;
pub mod error;
pub mod event;
pub mod exec;
pub mod outputs;
pub mod ui;
pub mod version;
pub mod workflow;

pub use error::{Result, VersionBumpError};
