//! CLI library components for the pharmacy claim report tool.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
