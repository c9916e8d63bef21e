use std::collections::HashMap;

use anyhow::Result;

use crate::collectors::{mounts, statfs};
use crate::collectors::statfs::RawFsCounts;
use crate::models::mount::MountRecord;
use crate::models::stats::FsSnapshot;

/// Collect paired space/inode snapshots for every mount in the table at
/// `mounts_path` that reports sane statistics.
pub fn collect(mounts_path: &str) -> Result<Vec<FsSnapshot>> {
    collect_with(|| mounts::read_mounts(mounts_path), statfs::query)
}

/// Two-pass collection. The mount table can change while we stat each
/// entry, so after gathering stats the table is read again and only mounts
/// still present survive, in second-read order. Mounts that fail either
/// stat call or report a zero total are dropped with a debug diagnostic;
/// a failed table read fails the whole collection.
fn collect_with<M, Q>(read_table: M, query: Q) -> Result<Vec<FsSnapshot>>
where
    M: Fn() -> Result<Vec<MountRecord>>,
    Q: Fn(&str) -> Result<RawFsCounts>,
{
    let first = read_table()?;

    let mut by_path: HashMap<String, FsSnapshot> = HashMap::new();
    for rec in &first {
        let space = match query(&rec.path) {
            Ok(raw) => statfs::space_stats(&raw),
            Err(_) => {
                log::debug!("cannot discern stats for the mount: {}", rec.path);
                continue;
            }
        };
        let inodes = match query(&rec.path) {
            Ok(raw) => statfs::inode_stats(&raw),
            Err(_) => {
                log::debug!("cannot discern inode for the mount: {}", rec.path);
                continue;
            }
        };

        if space.total > 0 && inodes.total > 0 {
            by_path.insert(rec.path.clone(), FsSnapshot {
                path:    rec.path.clone(),
                fs_type: rec.fs_type.clone(),
                space,
                inodes,
            });
        } else {
            log::debug!("skipping zero-sized mount: {}", rec.path);
        }
    }

    let second = read_table()?;
    let mut out = Vec::with_capacity(by_path.len());
    for rec in &second {
        if let Some(snap) = by_path.get(&rec.path) {
            out.push(snap.clone());
        }
    }

    Ok(out)
}
