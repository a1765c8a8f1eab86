use crate::models::partition::PartitionRecord;

/// Force-include the root mount regardless of the exclusion rules below.
/// Disabled in the original heuristic; kept so the intent is not lost.
const FORCE_INCLUDE_ROOT: bool = false;

/// Mountpoints that are always RAM- or runtime-backed.
const TMP_MOUNTS: &[&str] = &["/tmp", "/var/tmp", "/dev/shm", "/run", "/run/lock"];

/// Mountpoint substrings belonging to container runtimes.
const CONTAINER_MOUNT_PARTS: &[&str] = &["/run/k3s", "/var/lib/docker"];

/// Returns true when the partition is a real local block device worth
/// counting toward physical totals.
pub fn is_physical_disk(part: &PartitionRecord) -> bool {
    exclusion_reason(part).is_none()
}

/// Why a partition is excluded from physical totals, or `None` to accept it.
/// All rules are exclusionary, so evaluation order does not matter.
pub fn exclusion_reason(part: &PartitionRecord) -> Option<&'static str> {
    let mountpoint = part.mountpoint.to_lowercase();
    let fstype = part.fstype.to_lowercase();

    if FORCE_INCLUDE_ROOT && mountpoint == "/" {
        return None;
    }

    if TMP_MOUNTS.contains(&mountpoint.as_str()) {
        return Some("temporary filesystem");
    }

    if CONTAINER_MOUNT_PARTS.iter().any(|p| mountpoint.contains(p)) {
        return Some("container runtime mount");
    }

    if fstype.starts_with("nfs")
        || fstype.starts_with("cifs")
        || fstype.starts_with("smb")
        || fstype == "vboxsf"
        || fstype == "9p"
        || fstype.contains("fuse")
    {
        return Some("network filesystem");
    }

    if fstype == "overlay" {
        return Some("overlay filesystem");
    }

    if part.device.starts_with("/dev/loop") || fstype == "devtmpfs" || fstype == "tmpfs" {
        return Some("virtual memory / loop device");
    }

    let opts = part.options.join(",").to_lowercase();
    if opts.contains("remote") || opts.contains("network") {
        return Some("network mount option");
    }

    None
}
