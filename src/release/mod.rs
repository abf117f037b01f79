//! Release naming, archive formats and checksums
//!
//! - **name**: versioned distribution name (`slang-ui-1_2_3`)
//! - **archive**: archive formats and the tool invocations that produce them
//! - **checksum**: SHA-256 sidecars for produced archives

pub mod archive;
pub mod checksum;
pub mod name;

pub use archive::ArchiveFormat;
pub use name::versioned_name;
