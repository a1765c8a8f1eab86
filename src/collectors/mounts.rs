use crate::models::partition::PartitionRecord;
use anyhow::Result;

/// Kernel pseudo-filesystems that are never storage-backed. Skipped at
/// enumeration time; policy exclusions (tmpfs, overlay, network mounts)
/// belong to the classifier instead.
const PSEUDO_FS: &[&str] = &[
    "proc", "sysfs", "devpts", "cgroup", "cgroup2", "pstore", "efivarfs",
    "securityfs", "debugfs", "tracefs", "bpf", "hugetlbfs", "mqueue",
    "fusectl", "configfs", "binfmt_misc", "nsfs", "rpc_pipefs", "autofs",
    "ramfs",
];

/// Enumerate mounted partitions from /proc/mounts.
pub fn enumerate() -> Result<Vec<PartitionRecord>> {
    let content = std::fs::read_to_string("/proc/mounts")?;
    Ok(parse_mounts(&content))
}

/// Parse the contents of /proc/mounts into partition records.
pub fn parse_mounts(content: &str) -> Vec<PartitionRecord> {
    let mut out = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 { continue; }
        if PSEUDO_FS.contains(&fields[2]) { continue; }

        out.push(PartitionRecord {
            device:     unescape_mount_field(fields[0]),
            mountpoint: unescape_mount_field(fields[1]),
            fstype:     fields[2].to_string(),
            options:    fields[3].split(',').map(|s| s.to_string()).collect(),
        });
    }
    out
}

/// Decode the octal escapes the kernel uses for whitespace in mount paths
/// (\040 space, \011 tab, \012 newline, \134 backslash).
fn unescape_mount_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let digits: String = chars.clone().take(3).collect();
        match u8::from_str_radix(&digits, 8) {
            Ok(byte) if digits.len() == 3 => {
                out.push(byte as char);
                for _ in 0..3 { chars.next(); }
            }
            _ => out.push(c),
        }
    }
    out
}
