use anyhow::Result;
use clap::Parser;

use fsprobe::collectors::snapshot;
use fsprobe::config::Config;
use fsprobe::models::stats::FsSnapshot;
use fsprobe::util::human::{fmt_bytes, fmt_count, fmt_pct};

#[derive(Parser, Debug)]
#[command(name = "fsprobe", about = "Filesystem mount inventory and usage snapshots", version = "0.1")]
struct Cli {
    /// Print a one-shot JSON snapshot of all filesystems and exit
    #[arg(long)]
    json: bool,

    /// Show inode counts instead of byte sizes in the table
    #[arg(long)]
    inodes: bool,

    /// Mount table to read (overrides config; default /proc/mounts)
    #[arg(long, value_name = "PATH")]
    mounts: Option<String>,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = Config::load();

    if cli.config {
        return run_print_config(&cfg);
    }

    let mounts_path = cli.mounts.unwrap_or(cfg.general.mounts_path);
    let snaps = snapshot::collect(&mounts_path)?;

    if cli.json {
        run_json(&snaps, cfg.output.json_pretty)
    } else {
        run_table(&snaps, cli.inodes);
        Ok(())
    }
}

fn run_json(snaps: &[FsSnapshot], pretty: bool) -> Result<()> {
    use serde_json::{json, Value};

    let filesystems: Vec<Value> = snaps.iter().map(|s| {
        json!({
            "mountpoint": s.path,
            "fstype":     s.fs_type,
            "bytes": {
                "total": s.space.total,
                "free":  s.space.free,
                "used":  s.space.used,
                "pfree": s.space.pfree,
                "pused": s.space.pused,
                "total_hr": fmt_bytes(s.space.total),
                "used_hr":  fmt_bytes(s.space.used),
            },
            "inodes": {
                "total": s.inodes.total,
                "free":  s.inodes.free,
                "used":  s.inodes.used,
                "pfree": s.inodes.pfree,
                "pused": s.inodes.pused,
            },
        })
    }).collect();

    let snapshot = json!({
        "fsprobe_version": "0.1",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "filesystems": filesystems,
    });

    if pretty {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", serde_json::to_string(&snapshot)?);
    }
    Ok(())
}

fn run_table(snaps: &[FsSnapshot], inodes: bool) {
    for line in table_lines(snaps, inodes) {
        println!("{}", line);
    }
}

fn table_lines(snaps: &[FsSnapshot], inodes: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(snaps.len() + 1);
    if inodes {
        lines.push(format!("{:<28} {:<10} {:>10} {:>10} {:>10} {:>7}",
            "MOUNT", "TYPE", "INODES", "IUSED", "IFREE", "IUSE%"));
        for s in snaps {
            lines.push(format!("{:<28} {:<10} {:>10} {:>10} {:>10} {:>7}",
                s.path, s.fs_type,
                fmt_count(s.inodes.total),
                fmt_count(s.inodes.used),
                fmt_count(s.inodes.free),
                fmt_pct(s.inodes.pused)));
        }
    } else {
        lines.push(format!("{:<28} {:<10} {:>10} {:>10} {:>10} {:>7} {:>7}",
            "MOUNT", "TYPE", "SIZE", "USED", "AVAIL", "USE%", "IUSE%"));
        for s in snaps {
            lines.push(format!("{:<28} {:<10} {:>10} {:>10} {:>10} {:>7} {:>7}",
                s.path, s.fs_type,
                fmt_bytes(s.space.total),
                fmt_bytes(s.space.used),
                fmt_bytes(s.space.free),
                fmt_pct(s.space.pused),
                fmt_pct(s.inodes.pused)));
        }
    }
    lines
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  mounts_path = {}", cfg.general.mounts_path);
    println!();
    println!("[output]");
    println!("  json_pretty = {}", cfg.output.json_pretty);
    Ok(())
}
