pub mod disk;
pub mod partition;
