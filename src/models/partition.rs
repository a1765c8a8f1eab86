/// One mount-table entry as reported by the kernel.
///
/// An immutable snapshot taken at enumeration time; nothing here is refreshed
/// after the fact.
#[derive(Debug, Clone)]
pub struct PartitionRecord {
    pub device:     String,
    pub mountpoint: String,
    pub fstype:     String,
    /// Mount options in the order the kernel lists them ("rw", "relatime", …).
    pub options:    Vec<String>,
}
