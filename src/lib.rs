//! Filesystem mount inventory and usage snapshots.
//!
//! The entry point is [`collectors::snapshot::collect`], which reads the
//! mount table, stats every mount for space and inode usage, and returns
//! the reconciled list. Mounts that cannot be statted or report zero-sized
//! totals (pseudo filesystems, mostly) are left out.

pub mod collectors;
pub mod config;
pub mod models;
pub mod util;
