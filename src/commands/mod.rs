//! CLI commands for the release packager
//!
//! - **package**: rename the build output to its versioned name and archive it

pub mod package;

pub use package::{PackageOptions, run_package};
