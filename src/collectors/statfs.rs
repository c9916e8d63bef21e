use anyhow::{Context, Result};

use crate::models::stats::FsStats;

/// Raw counters from one statvfs call, before domain-specific math.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFsCounts {
    pub blocks:           u64,
    pub blocks_free:      u64,
    pub blocks_available: u64,
    pub block_size:       u64,
    pub files:            u64,
    pub files_free:       u64,
}

/// Query the OS for the raw filesystem counters behind `path`.
pub fn query(path: &str) -> Result<RawFsCounts> {
    let st = nix::sys::statvfs::statvfs(path)
        .with_context(|| format!("statvfs failed for {}", path))?;

    Ok(RawFsCounts {
        blocks:           st.blocks() as u64,
        blocks_free:      st.blocks_free() as u64,
        blocks_available: st.blocks_available() as u64,
        block_size:       st.fragment_size() as u64,
        files:            st.files() as u64,
        files_free:       st.files_free() as u64,
    })
}

/// Byte-space usage. "Free" counts only blocks available to unprivileged
/// users, and the percentage denominator is used + available blocks rather
/// than the raw total, so root-reserved blocks don't skew the numbers.
pub fn space_stats(raw: &RawFsCounts) -> FsStats {
    let total = raw.blocks * raw.block_size;
    let free  = raw.blocks_available * raw.block_size;
    let used  = total - free;

    let denom = (raw.blocks - raw.blocks_free + raw.blocks_available) as f64;
    let pfree = 100.0 * raw.blocks_available as f64 / denom;

    FsStats { total, free, used, pfree, pused: 100.0 - pfree }
}

/// Inode usage; percentages are over the raw inode total.
pub fn inode_stats(raw: &RawFsCounts) -> FsStats {
    let total = raw.files;
    let free  = raw.files_free;
    let used  = total - free;

    FsStats {
        total,
        free,
        used,
        pfree: 100.0 * free as f64 / total as f64,
        pused: 100.0 * used as f64 / total as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn space_math() {
        // 1000 blocks of 4096 bytes, 500 free, 400 available to users:
        // denominator is used + available = 900 blocks.
        let raw = RawFsCounts {
            blocks:           1000,
            blocks_free:      500,
            blocks_available: 400,
            block_size:       4096,
            ..Default::default()
        };
        let s = space_stats(&raw);
        assert_eq!(s.total, 4_096_000);
        assert_eq!(s.free, 1_638_400);
        assert_eq!(s.used, 2_457_600);
        assert!(close(s.pfree, 100.0 * 400.0 / 900.0)); // 44.44…
        assert!(close(s.pused, 100.0 - s.pfree));
    }

    #[test]
    fn space_percent_ignores_reserved_blocks() {
        // 100 free blocks but none available: everything free is reserved,
        // so the user-visible filesystem is 100% used.
        let raw = RawFsCounts {
            blocks:           1000,
            blocks_free:      100,
            blocks_available: 0,
            block_size:       1024,
            ..Default::default()
        };
        let s = space_stats(&raw);
        assert!(close(s.pfree, 0.0));
        assert!(close(s.pused, 100.0));
        // A naive total-based percentage would have said 10% free.
        assert_eq!(s.total, 1_024_000);
        assert_eq!(s.free, 0);
    }

    #[test]
    fn inode_math() {
        let raw = RawFsCounts { files: 1000, files_free: 300, ..Default::default() };
        let s = inode_stats(&raw);
        assert_eq!(s.total, 1000);
        assert_eq!(s.free, 300);
        assert_eq!(s.used, 700);
        assert!(close(s.pfree, 30.0));
        assert!(close(s.pused, 70.0));
    }

    #[test]
    fn fractional_percentages_are_not_truncated() {
        let raw = RawFsCounts { files: 3, files_free: 1, ..Default::default() };
        let s = inode_stats(&raw);
        assert!(close(s.pfree, 100.0 / 3.0));
        assert!(close(s.pused, 200.0 / 3.0));
    }

    #[cfg(unix)]
    #[test]
    fn stats_root() {
        let raw = query("/").unwrap();
        assert!(raw.blocks > 0);
        let s = space_stats(&raw);
        assert!(s.total > 0);
        assert!(s.pused >= 0.0 && s.pused <= 100.0);
    }

    #[test]
    fn unstatable_path_is_an_error() {
        assert!(query("/nonexistent/fsprobe-test-path").is_err());
    }
}
