use anyhow::Result;

/// Byte-level usage of one mounted filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MountUsage {
    pub total: u64,
    pub used:  u64,
}

/// Query usage for a mountpoint via statvfs.
pub fn query(mountpoint: &str) -> Result<MountUsage> {
    use nix::sys::statvfs::statvfs;
    let stat = statvfs(mountpoint)?;

    let frsize = stat.fragment_size() as u64;
    let total  = stat.blocks()      * frsize;
    let free   = stat.blocks_free() * frsize;

    Ok(MountUsage {
        total,
        used: total.saturating_sub(free),
    })
}
