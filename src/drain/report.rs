// @file report.rs

// Diagnostic seam for the drain loop. The loop never returns anything to its
// caller; everything observable flows through this trait, so tests swap in a
// capturing implementation instead of scraping the global logger.
pub trait Report {
    // bytes returned by a single read
    fn chunk(&mut self, len: usize);

    // cumulative total crossed another whole-megabyte boundary
    fn milestone(&mut self, mb: u64);

    // stream ended or failed; `total` is the cumulative byte count
    fn close(&mut self, total: u64, cause: &str);
}

// Production reporter. `label` keeps concurrent-in-time drains (one per input
// file) distinguishable in the log output.
pub struct LogReport {
    label: String,
}

impl LogReport {
    pub fn new(label: &str) -> Self {
        LogReport { label: label.to_string() }
    }
}

impl Report for LogReport {
    fn chunk(&mut self, len: usize) {
        log::debug!("{}: read {} bytes", self.label, len);
    }

    fn milestone(&mut self, mb: u64) {
        log::debug!("{}: read {}MB", self.label, mb);
    }

    fn close(&mut self, total: u64, cause: &str) {
        log::error!("{}: stream closed after {} bytes: {}", self.label, total, cause);
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryReport {
    pub chunks: Vec<usize>,
    pub milestones: Vec<u64>,
    pub closed: Vec<(u64, String)>,
}

#[cfg(test)]
impl Report for &mut MemoryReport {
    fn chunk(&mut self, len: usize) {
        self.chunks.push(len);
    }

    fn milestone(&mut self, mb: u64) {
        self.milestones.push(mb);
    }

    fn close(&mut self, total: u64, cause: &str) {
        self.closed.push((total, cause.to_string()));
    }
}

// end of report.rs
