pub mod mount;
pub mod stats;
