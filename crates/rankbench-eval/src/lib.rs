#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// pipeline configuration module.
pub mod config;

/// Error types for the evaluation pipeline.
pub mod error;

/// file naming convention module.
pub mod naming;

/// evaluation pipeline orchestration module.
pub mod pipeline;

/// evaluation records and report writing module.
pub mod report;

pub use crate::config::EvalConfig;
pub use crate::error::EvalError;
pub use crate::pipeline::{run, RunSummary};
