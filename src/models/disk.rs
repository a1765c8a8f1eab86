use serde::{Deserialize, Serialize};

/// Aggregated capacity and usage over all accepted physical mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskInfo {
    /// Total capacity in bytes.
    pub total: u64,
    /// Used bytes.
    pub used: u64,
}

impl DiskInfo {
    pub fn use_pct(&self) -> f64 {
        if self.total == 0 { return 0.0; }
        self.used as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keys_are_lowercase_total_and_used() {
        let info = DiskInfo { total: 300, used: 200 };
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"total":300,"used":200}"#);
    }

    #[test]
    fn use_pct_handles_zero_total() {
        assert_eq!(DiskInfo::default().use_pct(), 0.0);
        let half = DiskInfo { total: 200, used: 100 };
        assert!((half.use_pct() - 50.0).abs() < f64::EPSILON);
    }
}
