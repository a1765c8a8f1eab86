//! Physical-disk capacity/usage aggregation for Linux hosts.
//!
//! One call does everything: [`disk`] enumerates mounted partitions, drops
//! virtual, network, and container-overlay mounts, and sums total/used bytes
//! across what remains. It never fails — unreadable mount tables or
//! unstatable mounts simply contribute zero.

pub mod aggregate;
pub mod classifier;
pub mod collectors;
pub mod config;
pub mod models;
pub mod util;

pub use aggregate::disk;
pub use models::disk::DiskInfo;
