use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Result;

use crate::models::mount::MountRecord;

/// Default mount table on Linux.
pub const MOUNTS_PATH: &str = "/proc/mounts";

/// Parse a mount-table stream into records, in line order.
///
/// Fields are whitespace-separated; the 2nd is the mount point, the 3rd the
/// filesystem type. Lines with fewer than three fields are skipped. A read
/// error on the stream aborts the whole parse.
pub fn parse_mounts<R: BufRead>(reader: R) -> Result<Vec<MountRecord>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            log::debug!("cannot discern the mount in given line: {}", line);
            continue;
        }
        records.push(MountRecord {
            path:    fields[1].to_string(),
            fs_type: fields[2].to_string(),
        });
    }

    Ok(records)
}

/// Open the mount table at `path` and parse it. The handle is released when
/// this returns, success or not.
pub fn read_mounts(path: &str) -> Result<Vec<MountRecord>> {
    let file = File::open(path)?;
    parse_mounts(BufReader::new(file))
}
