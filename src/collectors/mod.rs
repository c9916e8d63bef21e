pub mod mounts;
pub mod snapshot;
pub mod statfs;
