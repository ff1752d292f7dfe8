use crate::logging::{log, LogLevel};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub visited: usize,
    pub excluded: usize,
    pub non_leaf: usize,
    pub consistent: usize,
    pub to_deactivate: usize,
    pub to_activate: usize,
    pub updated: usize,
}

impl ScanStats {
    pub fn add_excluded(&mut self) {
        self.visited += 1;
        self.excluded += 1;
    }
    pub fn add_non_leaf(&mut self) {
        self.visited += 1;
        self.non_leaf += 1;
    }
    pub fn add_consistent(&mut self) {
        self.visited += 1;
        self.consistent += 1;
    }
    pub fn add_to_deactivate(&mut self) {
        self.visited += 1;
        self.to_deactivate += 1;
    }
    pub fn add_to_activate(&mut self) {
        self.visited += 1;
        self.to_activate += 1;
    }
    pub fn add_updated(&mut self) {
        self.updated += 1;
    }
    pub fn get_classified(&self) -> usize {
        self.to_deactivate + self.to_activate
    }
}

pub fn log_summary(stats: &ScanStats, mode_name: &str, duration: Duration) {
    log(
        LogLevel::Info,
        &format!(
            "Scan '{}': {} visited, {} excluded, {} with children, {} consistent, {} active but empty, {} inactive but not empty, {} updated ({:.3?})",
            mode_name,
            stats.visited,
            stats.excluded,
            stats.non_leaf,
            stats.consistent,
            stats.to_deactivate,
            stats.to_activate,
            stats.updated,
            duration
        ),
    );
    let end_ts_str = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string();
    log(LogLevel::Debug, &format!("Scan finished at {}", end_ts_str));
}
