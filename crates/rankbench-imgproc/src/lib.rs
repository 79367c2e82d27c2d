#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// aggregate window filtering module.
pub mod filter;

/// gradient based edge extraction module.
pub mod gradient;

/// image quality metrics module.
pub mod metrics;

/// noise synthesis module.
pub mod noise;

/// module containing parallelization utilities.
pub mod parallel;

/// sliding window extraction module.
pub mod window;
