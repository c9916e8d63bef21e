/// Usage counters for one mount in a single domain — bytes or inodes.
/// The same shape serves both; which query produced it tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FsStats {
    pub total: u64,
    pub free:  u64,
    pub used:  u64,
    pub pfree: f64,
    pub pused: f64,
}

/// Reconciled snapshot for one mount: space and inode usage together.
/// Only built for mounts where both totals are non-zero.
#[derive(Debug, Clone)]
pub struct FsSnapshot {
    pub path:    String,
    pub fs_type: String,
    pub space:   FsStats,
    pub inodes:  FsStats,
}
