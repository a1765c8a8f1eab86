use crate::classifier;
use crate::collectors::mounts;
use crate::collectors::usage::{self, MountUsage};
use crate::models::disk::DiskInfo;
use crate::models::partition::PartitionRecord;
use anyhow::Result;

/// Sum total/used bytes across all physical-disk mounts.
///
/// Infallible by contract: enumeration failure yields a zero-valued
/// `DiskInfo`, and a mount whose usage lookup fails contributes nothing.
pub fn disk() -> DiskInfo {
    sum_physical(mounts::enumerate(), usage::query)
}

fn sum_physical(
    parts: Result<Vec<PartitionRecord>>,
    usage_of: impl Fn(&str) -> Result<MountUsage>,
) -> DiskInfo {
    let mut info = DiskInfo::default();
    let parts = match parts {
        Ok(p)  => p,
        Err(_) => return info,
    };

    for part in &parts {
        if !classifier::is_physical_disk(part) { continue; }
        match usage_of(&part.mountpoint) {
            Ok(u) => {
                info.total += u.total;
                info.used  += u.used;
            }
            Err(_) => continue,
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn part(device: &str, mountpoint: &str, fstype: &str) -> PartitionRecord {
        PartitionRecord {
            device:     device.to_string(),
            mountpoint: mountpoint.to_string(),
            fstype:     fstype.to_string(),
            options:    vec!["rw".to_string(), "relatime".to_string()],
        }
    }

    #[test]
    fn sums_accepted_partitions() {
        let parts = vec![part("/dev/sda1", "/", "ext4"), part("/dev/sdb1", "/data", "xfs")];
        let info = sum_physical(Ok(parts), |mp| match mp {
            "/"     => Ok(MountUsage { total: 100, used: 50 }),
            "/data" => Ok(MountUsage { total: 200, used: 150 }),
            _       => Err(anyhow!("unexpected mount {mp}")),
        });
        assert_eq!(info, DiskInfo { total: 300, used: 200 });
    }

    #[test]
    fn enumeration_failure_yields_zero() {
        let info = sum_physical(Err(anyhow!("mount table unreadable")), |_| {
            Ok(MountUsage { total: 1, used: 1 })
        });
        assert_eq!(info, DiskInfo { total: 0, used: 0 });
    }

    #[test]
    fn usage_failure_skips_that_mount_only() {
        let parts = vec![part("/dev/sda1", "/", "ext4"), part("/dev/sdb1", "/data", "xfs")];
        let info = sum_physical(Ok(parts), |mp| match mp {
            "/" => Err(anyhow!("statvfs failed")),
            _   => Ok(MountUsage { total: 200, used: 150 }),
        });
        assert_eq!(info, DiskInfo { total: 200, used: 150 });
    }

    #[test]
    fn rejected_partitions_are_never_queried() {
        let parts = vec![
            part("/dev/loop0", "/snap/core", "squashfs"),
            part("server:/export", "/mnt/nfs", "nfs4"),
        ];
        let info = sum_physical(Ok(parts), |mp| {
            panic!("usage queried for excluded mount {mp}");
        });
        assert_eq!(info, DiskInfo::default());
    }
}
