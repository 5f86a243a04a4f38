// @file discard.rs

use super::Report;
use crate::params::{BLOCK_SIZE, MB};
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Reads the source to exhaustion in fixed-size chunks and throws the bytes
// away. Progress and the terminal condition go through the Report seam; the
// caller gets nothing back, not even an eof-vs-error distinction (both take
// the identical close path).
//
// The source's lifecycle belongs to the caller; this neither opens nor
// closes anything.
pub struct DiscardDrain<T: Sized + Read, R: Report> {
    src: T,
    report: R,
    block_size: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl<T: Sized + Read, R: Report> DiscardDrain<T, R> {
    pub fn new(src: T, report: R) -> Self {
        DiscardDrain {
            src,
            report,
            block_size: BLOCK_SIZE,
            cancel: None,
        }
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        assert!(block_size > 0);
        self.block_size = block_size;
        self
    }

    // opt-in cooperative cancellation, polled once per iteration before the
    // read; the default (no flag) leaves the loop uninterruptible
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn run(&mut self) {
        // scratch is reused across iterations; the contents are dead the
        // moment they are counted
        let mut scratch = vec![0u8; self.block_size];
        let mut total: u64 = 0;
        let mut reported: u64 = 0;

        loop {
            if let Some(cancel) = &self.cancel {
                if cancel.load(Ordering::Relaxed) {
                    self.report.close(total, "cancelled");
                    return;
                }
            }

            let len = match self.src.read(&mut scratch) {
                Ok(0) => {
                    self.report.close(total, "end of stream");
                    return;
                }
                Ok(len) => len,
                Err(err) => {
                    self.report.close(total, &err.to_string());
                    return;
                }
            };

            total += len as u64;
            self.report.chunk(len);

            // at most one milestone per read, even when a single read
            // crosses several megabyte boundaries
            let mb = total / MB;
            if mb > reported {
                self.report.milestone(mb);
                reported = mb;
            }
        }
    }
}


// end of discard.rs
