//! Host identity and package metadata.
//!
//! ## Key Types
//!
//! - `HostContext`: the shared bundle of host identity plus the four
//!   collaborator seams the pipeline consults
//! - `PackageInfoSource`: version-code lookup for installed packages
//! - `MemoryPackageSource`: in-memory package table

pub mod context;
pub mod package;

pub use context::HostContext;
pub use package::{MemoryPackageSource, PackageInfoSource};
