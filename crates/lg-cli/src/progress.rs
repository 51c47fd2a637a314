use std::io::{self, Read};
use std::time::{Duration, Instant};

use tracing::info;

const REPORT_EVERY: Duration = Duration::from_secs(3);

/// Reader that logs how far through a file of known size it has got.
pub struct Progress<R> {
    inner: R,
    total: u64,
    read: u64,
    last_report: Instant,
}

impl<R: Read> Progress<R> {
    pub fn new(inner: R, total: u64) -> Self {
        Self {
            inner,
            total,
            read: 0,
            last_report: Instant::now(),
        }
    }

    /// Bytes consumed so far.
    pub fn bytes_read(&self) -> u64 {
        self.read
    }

    fn percent(&self) -> u64 {
        if self.total == 0 {
            100
        } else {
            self.read.saturating_mul(100) / self.total
        }
    }
}

impl<R: Read> Read for Progress<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.read += n as u64;
        if self.last_report.elapsed() >= REPORT_EVERY {
            info!(
                read = self.read,
                total = self.total,
                percent = self.percent(),
                "loading"
            );
            self.last_report = Instant::now();
        }
        Ok(n)
    }
}
